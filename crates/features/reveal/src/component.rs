use crate::controller::RevealController;
use crate::options::RevealOptions;
use dioxus::prelude::*;
use folio_domain::Direction;
use folio_domain::config::SiteConfig;
use folio_kernel::host::HostHandle;
use std::time::Duration;

/// A `<section>` that fades and slides in the first time it scrolls into view.
///
/// Reads the [`HostHandle`] and [`SiteConfig`] from context, falling back to a static host
/// and default motion settings when the tree does not provide them. `motion.force_reduced`
/// behaves like a reduced-motion preference reported by the host.
#[component]
pub fn RevealSection(
    /// Element id, used as the in-page anchor.
    #[props(into)]
    id: Option<String>,
    /// Id of the heading labelling this section.
    #[props(into)]
    labelled_by: Option<String>,
    #[props(into)]
    class: Option<String>,
    #[props(default)] direction: Direction,
    #[props(default)] delay: Duration,
    children: Element,
) -> Element {
    let host = try_use_context::<HostHandle>().unwrap_or_default();
    let motion = try_use_context::<SiteConfig>().map(|site| site.motion.clone()).unwrap_or_default();

    let options = RevealOptions::builder().direction(direction).delay(delay).motion(motion).build();
    let reduced = options.reduced_motion(host.prefers_reduced_motion());
    let threshold = options.motion.threshold;
    let mut controller = use_signal(|| RevealController::new(threshold));

    let mode = controller.read().mode(reduced);
    let style = controller.read().visual(reduced, &options).style();

    rsx! {
        section {
            id,
            class,
            "aria-labelledby": labelled_by,
            "data-reveal": mode.as_ref(),
            style,
            onmounted: move |event: MountedEvent| {
                let target = event.data();
                let mut signal = controller;
                controller.write().mount(reduced, || {
                    host.observe(
                        &target,
                        threshold,
                        Box::new(move |ratio| {
                            signal.write().notify(ratio);
                        }),
                    )
                });
            },
            {children}
        }
    }
}
