//! Capability interface to the rendering environment.
//!
//! Components never touch browser APIs directly. They ask the [`Host`] in context whether the
//! visitor prefers reduced motion, to watch an element entering the viewport, and to scroll
//! back to the top. Every capability degrades to a silent no-op when the environment lacks it.

#[cfg(feature = "web")]
mod web;

#[cfg(feature = "web")]
pub use web::BrowserHost;

use dioxus::html::MountedData;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Callback receiving the latest visible fraction (`0.0..=1.0`) of an observed element.
pub type VisibilityCallback = Box<dyn FnMut(f64)>;

/// What the rendering environment can do for the page.
pub trait Host {
    /// Whether the visitor asked the platform to minimise non-essential motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Starts reporting how much of `target` is inside the viewport.
    ///
    /// `on_change` is called with the visible fraction whenever it crosses `threshold`.
    /// Returns `None` when the environment cannot observe the viewport; callers should then
    /// show the content right away.
    fn observe(
        &self,
        target: &MountedData,
        threshold: f64,
        on_change: VisibilityCallback,
    ) -> Option<Subscription>;

    /// Requests a scroll back to the top of the page. No-op without a scroll API.
    fn scroll_to_top(&self);
}

/// Handle to an active observation. Tears it down when cancelled or dropped.
#[must_use = "Dropping a subscription stops the observation immediately."]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// Stops the observation now.
    pub fn cancel(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.teardown.is_some()).finish()
    }
}

/// Host for environments without a live viewport: static rendering, tests, or any renderer
/// where the browser APIs are missing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticHost {
    reduced_motion: bool,
}

impl StaticHost {
    #[must_use]
    pub const fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion }
    }

    /// A host reporting a reduced-motion preference.
    #[must_use]
    pub const fn reduced() -> Self {
        Self::new(true)
    }
}

impl Host for StaticHost {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn observe(&self, _: &MountedData, _: f64, _: VisibilityCallback) -> Option<Subscription> {
        None
    }

    fn scroll_to_top(&self) {
        tracing::trace!("scroll to top requested without a scroll API");
    }
}

/// Shared, cheaply cloneable host placed in the component context.
#[derive(Clone)]
pub struct HostHandle(Rc<dyn Host>);

impl HostHandle {
    pub fn new(host: impl Host + 'static) -> Self {
        Self(Rc::new(host))
    }
}

impl Default for HostHandle {
    fn default() -> Self {
        Self::new(StaticHost::default())
    }
}

impl Deref for HostHandle {
    type Target = dyn Host;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("reduced_motion", &self.0.prefers_reduced_motion())
            .finish_non_exhaustive()
    }
}
