use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::features::showcase::HomePage;
use folio::kernel::host::{BrowserHost, HostHandle};
use std::any::Any;

/// Browser entry point.
#[derive(Debug)]
pub struct WebApp {
    site: SiteConfig,
    level: Level,
}

impl Default for WebApp {
    fn default() -> Self {
        Self { site: SiteConfig::default(), level: Level::INFO }
    }
}

impl WebApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Installs the console logger and mounts the page.
    pub fn launch(self) {
        if let Err(err) = dioxus::logger::init(self.level) {
            // A logger installed by the embedder is fine.
            tracing::debug!("logger already initialised: {err}");
        }
        if let Err(err) = folio::kernel::validate(&self.site) {
            tracing::warn!("site content has problems: {err}");
        }

        let site = self.site;
        LaunchBuilder::web()
            .with_context_provider(move || Box::new(site.clone()) as Box<dyn Any>)
            .with_context_provider(|| Box::new(HostHandle::new(BrowserHost)) as Box<dyn Any>)
            .launch(HomePage);
    }
}
