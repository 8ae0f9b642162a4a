use dioxus::prelude::*;
use folio::App;
use folio::domain::config::SiteConfig;
use folio::features;
use folio::kernel::host::{HostHandle, StaticHost};

#[test]
fn client_build_registers_every_slice() {
    for name in ["client", "reveal", "navigation", "showcase"] {
        assert!(features::is_enabled(name), "{name}");
    }
    assert!(!features::is_enabled("server"));
}

#[test]
fn renders_with_defaults() {
    let html = dioxus_ssr::render_element(rsx! { App {} });

    assert!(html.contains(r#"id="mobile-menu""#), "{html}");
    assert!(html.contains(r#"<section id="about""#), "{html}");
    assert!(html.contains("<footer"), "{html}");
}

#[test]
fn host_preference_reaches_every_section() {
    let html = dioxus_ssr::render_element(rsx! {
        App { host: HostHandle::new(StaticHost::reduced()) }
    });

    assert_eq!(html.matches(r#"data-reveal="static""#).count(), 4, "{html}");
}

#[test]
fn site_config_reaches_the_header() {
    let mut site = SiteConfig::default();
    site.profile.name = "Ada Lovelace".to_owned();
    let html = dioxus_ssr::render_element(rsx! { App { site } });

    assert!(html.contains("Ada Lovelace"), "{html}");
    assert!(html.contains("Ada Lovelace. All rights reserved."), "{html}");
}
