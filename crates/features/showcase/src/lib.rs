//! Page composition.
//!
//! Every section pulls its copy from the [`SiteConfig`](folio_domain::config::SiteConfig) in
//! context and its entrance from [`SectionsConfig`](folio_domain::config::SectionsConfig), so
//! the components themselves hold no content.

mod format;

#[cfg(feature = "client")]
mod page;
#[cfg(feature = "client")]
mod sections;

pub use format::{copyright, current_year, mailto};
#[cfg(feature = "client")]
pub use page::{HomePage, SiteFooter};
#[cfg(feature = "client")]
pub use sections::{AboutSection, ContactSection, ProjectsSection, SkillsSection};
