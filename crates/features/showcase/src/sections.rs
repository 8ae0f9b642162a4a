use crate::format::mailto;
use dioxus::prelude::*;
use folio_domain::SectionId;
use folio_domain::config::SiteConfig;
use folio_reveal::RevealSection;
use std::time::Duration;

const PROJECTS_INTRO: &str = "A selection of projects that highlight my skills, interests, and \
                              the technologies I enjoy working with.";
const SKILLS_INTRO: &str = "Technologies, tools, and platforms I work with regularly.";

/// Site configuration from context, or the compiled-in defaults.
pub(crate) fn use_site() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

/// Reveal wrapper with the standard heading and intro line of a content section.
#[component]
fn TitledSection(section: SectionId, #[props(into)] intro: String, children: Element) -> Element {
    let layout = *use_site().sections.layout(section);
    let heading = section.heading_id().unwrap_or_else(|| section.anchor());

    rsx! {
        RevealSection {
            id: section.anchor(),
            labelled_by: heading,
            class: "border-t border-slate-900/60 py-16",
            direction: layout.direction,
            delay: Duration::from_millis(layout.delay_ms),
            h2 { id: heading, class: "text-2xl font-semibold tracking-tight", {section.label()} }
            p { class: "mt-2 text-sm text-slate-400", "{intro}" }
            {children}
        }
    }
}

/// Hero with the profile copy, calls to action and portrait.
#[component]
pub fn AboutSection() -> Element {
    let site = use_site();
    let layout = *site.sections.layout(SectionId::About);
    let profile = &site.profile;

    rsx! {
        RevealSection {
            id: SectionId::About.anchor(),
            class: "relative flex flex-col gap-10 py-16 md:flex-row md:items-center",
            direction: layout.direction,
            delay: Duration::from_millis(layout.delay_ms),
            div { class: "pointer-events-none absolute inset-x-0 -top-32 -z-10 h-72 bg-gradient-to-b from-sky-500/10 via-slate-950 to-slate-950 blur-3xl" }

            div { class: "flex-1 space-y-6",
                p { class: "text-xs font-semibold uppercase tracking-[0.25em] text-sky-400",
                    "{profile.eyebrow}"
                }
                h1 { class: "text-5xl font-semibold tracking-tight md:text-6xl", "{profile.name}" }
                p { class: "mt-2 text-xs uppercase tracking-[0.25em] text-slate-400",
                    "{profile.tagline}"
                }
                p { class: "text-base leading-relaxed text-slate-300",
                    "I'm a "
                    span { class: "font-semibold text-sky-400", "{profile.role}" }
                    " {profile.summary}"
                }
                p { class: "max-w-xl text-sm leading-relaxed text-slate-400", "{profile.bio}" }
                p { class: "text-xs text-slate-500", "{profile.availability}" }
                div { class: "flex flex-wrap gap-3",
                    a {
                        href: SectionId::Projects.href(),
                        class: "rounded-full bg-sky-500 px-5 py-2 text-sm font-medium text-slate-950 transition hover:bg-sky-400 hover:-translate-y-0.5 hover:shadow-lg",
                        "View Projects"
                    }
                    a {
                        href: SectionId::Contact.href(),
                        class: "rounded-full border border-slate-600 px-5 py-2 text-sm font-medium transition hover:border-sky-400 hover:-translate-y-0.5 hover:shadow-lg",
                        "Contact Me"
                    }
                }
            }

            div { class: "relative mx-auto h-48 w-48 md:h-64 md:w-64 md:translate-y-2",
                div {
                    class: "absolute inset-0 rounded-3xl bg-sky-500/30 blur-3xl",
                    "aria-hidden": "true",
                }
                div { class: "relative h-full w-full overflow-hidden rounded-3xl border border-slate-700/80 bg-slate-900 shadow-xl shadow-sky-500/10",
                    img {
                        src: "{profile.photo}",
                        alt: "{profile.photo_alt}",
                        class: "h-full w-full object-cover",
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let site = use_site();

    rsx! {
        TitledSection { section: SectionId::Projects, intro: PROJECTS_INTRO,
            div { class: "mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for project in site.projects.iter() {
                    article {
                        key: "{project.title}",
                        class: "group flex flex-col rounded-2xl border border-slate-800 bg-slate-900/60 p-5 shadow-sm shadow-slate-950/40 transition-transform transition-shadow hover:-translate-y-1 hover:border-sky-500/60 hover:shadow-lg hover:shadow-sky-500/20",
                        header { class: "flex items-center justify-between gap-2",
                            h3 { class: "text-base font-semibold text-slate-100", "{project.title}" }
                            span { class: "text-[10px] uppercase tracking-[0.2em] text-slate-500",
                                "Project"
                            }
                        }
                        p { class: "mt-3 flex-1 text-sm leading-relaxed text-slate-300",
                            "{project.description}"
                        }
                        ul { class: "mt-4 flex flex-wrap gap-1.5 text-[11px] text-sky-300",
                            for tech in project.tech.iter() {
                                li {
                                    key: "{tech}",
                                    class: "rounded-full border border-sky-500/30 bg-sky-500/5 px-2 py-0.5",
                                    "{tech}"
                                }
                            }
                        }
                        a {
                            href: "{project.link}",
                            class: "mt-4 inline-flex items-center text-sm font-medium text-sky-400 transition group-hover:text-sky-300",
                            "View project"
                            span {
                                "aria-hidden": "true",
                                class: "ml-1 transition-transform group-hover:translate-x-0.5",
                                "→"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    let site = use_site();

    rsx! {
        TitledSection { section: SectionId::Skills, intro: SKILLS_INTRO,
            div { class: "mt-6 grid gap-6 md:grid-cols-3",
                for group in site.skills.iter() {
                    div {
                        key: "{group.category}",
                        class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-5",
                        h3 { class: "flex items-center gap-2 text-sm font-semibold uppercase tracking-wide text-slate-200",
                            span { "aria-hidden": "true", "{group.icon}" }
                            span { "{group.category}" }
                        }
                        ul { class: "mt-3 flex flex-wrap gap-2",
                            for skill in group.items.iter() {
                                li {
                                    key: "{skill}",
                                    class: "rounded-full bg-slate-800/80 px-3 py-1 text-xs text-slate-200",
                                    "{skill}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let contact = &site.contact;

    rsx! {
        TitledSection { section: SectionId::Contact, intro: contact.intro.clone(),
            div { class: "mt-6 rounded-2xl border border-slate-800 bg-slate-900/60 p-6",
                span { class: "inline-flex items-center rounded-full bg-emerald-500/10 px-3 py-1 text-xs font-medium text-emerald-300",
                    "● {contact.status}"
                }
                p { class: "mt-4 text-sm leading-relaxed text-slate-300", "{contact.message}" }
                p { class: "mt-3 text-sm font-medium text-sky-400",
                    a { href: mailto(&contact.email), class: "hover:text-sky-300", "{contact.email}" }
                }
                p { class: "mt-3 text-xs text-slate-500", "{contact.closing}" }
            }
        }
    }
}
