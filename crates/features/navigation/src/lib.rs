//! Mobile navigation feature slice.
//!
//! The whole slice hangs off one boolean: whether the collapsible link panel is open.
//! The menu button toggles it; following a link or pressing the brand closes it, and the
//! brand additionally asks the host to scroll back to the top.
//!
//! ```rust
//! use folio_navigation::{NavAction, NavEffect, NavState, reduce};
//! use folio_domain::SectionId;
//!
//! let open = reduce(NavState::default(), NavAction::ToggleMenu).state;
//! assert!(open.is_open());
//!
//! let step = reduce(open, NavAction::FollowLink(SectionId::Skills));
//! assert!(!step.state.is_open());
//! assert_eq!(step.effect, None);
//!
//! let step = reduce(open, NavAction::ActivateBrand);
//! assert_eq!(step.effect, Some(NavEffect::ScrollToTop));
//! ```

mod state;
mod view;

#[cfg(feature = "client")]
mod component;

#[cfg(feature = "client")]
pub use component::{SiteHeader, SiteHeaderProps};
pub use state::{NavAction, NavEffect, NavState, Step, dispatch, reduce};
pub use view::{MenuIcon, NavView, PanelStyle};

/// Id of the collapsible panel, referenced by the menu button's `aria-controls`.
pub const PANEL_ID: &str = "mobile-menu";
