//! Reveal-on-scroll feature slice.
//!
//! A section wrapped by [`RevealSection`] starts transparent and displaced along one axis,
//! then fades and slides into place the first time enough of it scrolls into view. Visitors
//! who prefer reduced motion get the final state immediately, with no observation at all.
//!
//! The pieces are split so the behaviour is testable without a browser:
//!
//! * [`offset_for`] is the fixed direction table.
//! * [`RevealController`] is the one-shot `Armed -> Fired` state machine owning the
//!   viewport subscription.
//! * [`VisualState`] is the pure projection rendered as inline style.
//!
//! ```rust
//! use folio_reveal::{RevealController, RevealOptions, RevealState};
//! use folio_domain::Direction;
//!
//! let options = RevealOptions::builder().direction(Direction::Right).build();
//! let mut controller = RevealController::new(options.motion.threshold);
//!
//! assert_eq!(controller.visual(false, &options).opacity, 0.0);
//! assert!(controller.notify(0.4));
//! assert!(!controller.notify(0.9));
//! assert_eq!(controller.state(), RevealState::Visible);
//! ```

mod controller;
mod options;
mod visual;

#[cfg(feature = "client")]
mod component;

#[cfg(feature = "client")]
pub use component::{RevealSection, RevealSectionProps};
pub use controller::{RATIO_TOLERANCE, RevealController, RevealMode, RevealState};
pub use options::RevealOptions;
pub use visual::{Offset, TransitionSpec, VisualState, offset_for};
