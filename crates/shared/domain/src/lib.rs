//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, no rendering, no host access. Just data, defaults and simple helpers.

pub mod config;
pub mod content;
pub mod section;

pub use section::{Axis, Direction, SectionId};
