use crate::format::{copyright, current_year};
use crate::sections::{AboutSection, ContactSection, ProjectsSection, SkillsSection, use_site};
use dioxus::prelude::*;
use folio_navigation::SiteHeader;

const SOCIAL_LINK: &str = "rounded-full border border-slate-700/80 px-3 py-1.5 text-[11px] \
                           uppercase tracking-[0.16em] text-slate-300 transition \
                           hover:border-sky-500/60 hover:text-sky-300";

#[component]
pub fn SiteFooter() -> Element {
    let site = use_site();
    let notice = copyright(current_year(), &site.profile.name);

    rsx! {
        footer { class: "border-t border-slate-800 bg-slate-950/80",
            div { class: "mx-auto flex max-w-5xl flex-col items-center justify-between gap-3 px-4 py-6 text-xs text-slate-500 md:flex-row",
                p { "{notice}" }
                div { class: "flex gap-3",
                    for social in site.socials.iter() {
                        a { key: "{social.label}", href: "{social.url}", class: SOCIAL_LINK, "{social.label}" }
                    }
                }
            }
        }
    }
}

/// The whole page: header, the four sections and the footer.
#[component]
pub fn HomePage() -> Element {
    let site = use_site();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            SiteHeader { brand: site.profile.name.clone() }
            main { class: "mx-auto max-w-5xl px-4",
                AboutSection {}
                ProjectsSection {}
                SkillsSection {}
                ContactSection {}
            }
            SiteFooter {}
        }
    }
}
