use super::{Host, Subscription, VisibilityCallback};
use dioxus::html::MountedData;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Host backed by the browser window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn observe(
        &self,
        target: &MountedData,
        threshold: f64,
        mut on_change: VisibilityCallback,
    ) -> Option<Subscription> {
        let element = target.downcast::<Element>()?.clone();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                let ratio = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 })
                    .fold(0.0_f64, f64::max);
                on_change(ratio);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| tracing::debug!("IntersectionObserver unavailable: {err:?}"))
                .ok()?;
        observer.observe(&element);

        Some(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }

    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
