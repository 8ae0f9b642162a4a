use crate::PANEL_ID;
use crate::state::{NavAction, NavState, dispatch};
use crate::view::NavView;
use dioxus::prelude::*;
use folio_domain::SectionId;
use folio_domain::config::SiteConfig;
use folio_kernel::host::HostHandle;

const DESKTOP_LINK: &str = "text-[11px] font-medium uppercase tracking-[0.18em] text-slate-400 \
                            transition hover:text-white";
const MOBILE_LINK: &str =
    "rounded-md px-2 py-2 text-slate-300 hover:bg-slate-800/70 hover:text-white";

/// Sticky site header: brand, desktop links and the collapsible mobile menu.
#[component]
pub fn SiteHeader(#[props(into)] brand: String) -> Element {
    let host = try_use_context::<HostHandle>().unwrap_or_default();
    let config =
        try_use_context::<SiteConfig>().map(|site| site.navigation.clone()).unwrap_or_default();

    let mut nav = use_signal(NavState::default);
    let on_action = use_callback(move |action: NavAction| {
        dispatch(&mut nav.write(), action, &*host);
    });

    let view = NavView::project(nav(), &config);
    let icon: &'static str = view.icon.into();
    let [top, middle, bottom] = view.icon.bar_classes();

    rsx! {
        header { class: "sticky top-0 z-30 border-b border-slate-800 bg-slate-950/80 backdrop-blur",
            nav { class: "mx-auto flex max-w-5xl items-center justify-between px-4 py-3",
                button {
                    class: "text-xs font-semibold tracking-[0.25em] uppercase text-slate-300",
                    "data-nav": "brand",
                    onclick: move |_| on_action.call(NavAction::ActivateBrand),
                    "{brand}"
                }

                div { class: "hidden gap-6 md:flex",
                    for section in SectionId::ALL {
                        a {
                            key: "{section}",
                            class: DESKTOP_LINK,
                            href: section.href(),
                            onclick: move |_| on_action.call(NavAction::FollowLink(section)),
                            {section.label()}
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "inline-flex items-center justify-center rounded-full border border-slate-700 px-2.5 py-2 text-slate-200 transition hover:border-sky-500/60 hover:text-sky-300 md:hidden",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": view.aria_expanded,
                    "aria-controls": PANEL_ID,
                    "data-icon": icon,
                    onclick: move |_| on_action.call(NavAction::ToggleMenu),
                    span { class: "sr-only", {view.icon.label()} }
                    span { class: "flex flex-col gap-1.5",
                        span { class: top }
                        span { class: middle }
                        span { class: bottom }
                    }
                }
            }

            div {
                id: PANEL_ID,
                class: "md:hidden border-t border-slate-800 bg-slate-950/95 backdrop-blur-sm",
                "data-open": if view.open { "true" } else { "false" },
                style: view.panel.style(),
                div { class: "mx-auto flex max-w-5xl flex-col space-y-1 px-4 py-3 text-sm",
                    for section in SectionId::ALL {
                        a {
                            key: "{section}",
                            class: MOBILE_LINK,
                            href: section.href(),
                            onclick: move |_| on_action.call(NavAction::FollowLink(section)),
                            {section.label()}
                        }
                    }
                }
            }
        }
    }
}
