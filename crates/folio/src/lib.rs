//! Facade crate for the portfolio.
//! Re-exports domain/kernel primitives and the feature slices, and provides the [`App`] root.
//! Keep this crate thin: it should compose other crates, not implement page logic.
//!
//! ## Usage
//! - Add `folio` with `client` (server-side rendering, tests) or `web` (browser host).
//! - Render [`App`] with a [`SiteConfig`](domain::config::SiteConfig) and a
//!   [`HostHandle`](kernel::host::HostHandle); both default when omitted.

pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(feature = "client")]
mod app;

#[cfg(feature = "client")]
pub use app::{App, AppProps};

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_navigation as navigation;
    pub use folio_reveal as reveal;
    pub use folio_showcase as showcase;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "web")]
        "web",
        "reveal",
        "navigation",
        #[cfg(feature = "client")]
        "showcase",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
