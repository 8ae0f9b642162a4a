use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The four anchored sections of the page, in document order.
///
/// The string form is the stable anchor id (`about`, `projects`, ...), shared by the
/// navigation links and the section elements they point at.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 4] = [Self::About, Self::Projects, Self::Skills, Self::Contact];

    /// Element id of the section.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        self.into()
    }

    /// In-page link target, e.g. `#projects`.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Human readable link text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Id of the heading that labels the section (`aria-labelledby`).
    ///
    /// The about section is the hero and carries no separate heading id.
    #[must_use]
    pub const fn heading_id(self) -> Option<&'static str> {
        match self {
            Self::About => None,
            Self::Projects => Some("projects-heading"),
            Self::Skills => Some("skills-heading"),
            Self::Contact => Some("contact-heading"),
        }
    }
}

/// Screen axis an entrance slide travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Visual direction of a section entrance.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis lookup: `left`/`right` slide horizontally, `up`/`down` vertically.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// Sign of the starting offset: `up`/`left` start negative, `down`/`right` positive.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Up | Self::Left => -1.0,
            Self::Down | Self::Right => 1.0,
        }
    }
}
