use dioxus::prelude::*;
use folio_domain::config::SiteConfig;
use folio_kernel::host::HostHandle;
use folio_showcase::HomePage;

/// Root component: puts the site configuration and the host into context and renders the page.
#[component]
pub fn App(#[props(default)] site: SiteConfig, #[props(default)] host: HostHandle) -> Element {
    use_context_provider(|| site.clone());
    use_context_provider(|| host.clone());

    rsx! { HomePage {} }
}
