//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, content validation and the [`host::Host`]
//! capability interface the components use to talk to the rendering environment.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use folio_kernel::config::load_config;
//!     use folio_kernel::domain::config::SiteConfig;
//!     let cfg: SiteConfig = load_config(Some("portfolio.toml")).unwrap();
//! # }
//! ```
//!
//! ## Hosts
//! ```rust
//! use folio_kernel::host::{HostHandle, StaticHost};
//!
//! let host = HostHandle::new(StaticHost::reduced());
//! assert!(host.prefers_reduced_motion());
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod host;
pub mod validate;

pub use folio_domain as domain;
pub use validate::{ContentError, ContentErrorExt, validate};
