use dioxus::prelude::*;
use folio::App;
use folio::domain::config::SiteConfig;
use folio::kernel::host::{HostHandle, StaticHost};

/// Head and body of the page. The `<html>` wrapper is added by [`render_document`].
#[component]
pub fn Document(site: SiteConfig, #[props(into)] stylesheet: String) -> Element {
    let title = format!("{} | {}", site.profile.name, site.profile.eyebrow);
    let description = format!("{} {}", site.profile.tagline, site.profile.summary);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "description", content: description }
            title { "{title}" }
            link { rel: "stylesheet", href: stylesheet }
        }
        body { class: "antialiased",
            App { site, host: HostHandle::new(StaticHost::default()) }
        }
    }
}

/// Renders a script-free document. Entrances cannot run without a script, so every section
/// is emitted in its final state.
#[must_use]
pub fn render_document(site: &SiteConfig, stylesheet: &str) -> String {
    let mut site = site.clone();
    site.motion.force_reduced = true;

    let page = dioxus_ssr::render_element(rsx! {
        Document { site, stylesheet }
    });
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{page}\n</html>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_head_and_visible_sections() {
        let html = render_document(&SiteConfig::default(), "/assets/site.css");

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>"), "{html}");
        assert!(html.trim_end().ends_with("</body>\n</html>"), "{html}");
        assert!(html.contains(r#"<meta charset="utf-8""#), "{html}");
        assert!(html.contains(r#"href="/assets/site.css""#), "{html}");
        assert!(html.contains("<title>Brody Broughton | Portfolio</title>"), "{html}");
        assert_eq!(html.matches(r#"data-reveal="static""#).count(), 4, "{html}");
    }

    #[test]
    fn caller_config_is_left_untouched() {
        let site = SiteConfig::default();
        let _ = render_document(&site, "/a.css");
        assert!(!site.motion.force_reduced);
    }
}
