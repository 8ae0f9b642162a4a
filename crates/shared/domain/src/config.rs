use crate::content::{Contact, Profile, Project, SkillGroup, SocialLink};
use crate::section::{Direction, SectionId};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the page renders, plus the knobs of its two behaviours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
    pub sections: SectionsConfig,
    pub motion: MotionConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Entrance parameters for each section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub about: SectionLayout,
    pub projects: SectionLayout,
    pub skills: SectionLayout,
    pub contact: SectionLayout,
}

impl SectionsConfig {
    #[must_use]
    pub const fn layout(&self, id: SectionId) -> &SectionLayout {
        match id {
            SectionId::About => &self.about,
            SectionId::Projects => &self.projects,
            SectionId::Skills => &self.skills,
            SectionId::Contact => &self.contact,
        }
    }
}

/// Direction and start delay of one section's entrance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionLayout {
    pub direction: Direction,
    pub delay_ms: u64,
}

/// Reveal animation constants. Cosmetic; tune freely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Starting displacement along the slide axis, in px.
    pub distance: f64,
    /// Fraction of the element that must be inside the viewport before it reveals.
    pub threshold: f64,
    pub duration_ms: u64,
    /// Cubic-bezier control points.
    pub easing: [f64; 4],
    /// Treat every visitor as preferring reduced motion.
    pub force_reduced: bool,
}

/// Mobile navigation panel constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub transition_ms: u64,
    /// CSS `max-height` of the expanded panel.
    pub expanded_height: String,
}

/// Logging setup for the native binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for SiteConfigInner {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            projects: Project::defaults(),
            skills: SkillGroup::defaults(),
            contact: Contact::default(),
            socials: SocialLink::defaults(),
            sections: SectionsConfig::default(),
            motion: MotionConfig::default(),
            navigation: NavigationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            about: SectionLayout { direction: Direction::Up, delay_ms: 0 },
            projects: SectionLayout { direction: Direction::Right, delay_ms: 50 },
            skills: SectionLayout { direction: Direction::Left, delay_ms: 50 },
            contact: SectionLayout { direction: Direction::Up, delay_ms: 50 },
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            distance: 40.0,
            threshold: 0.25,
            duration_ms: 600,
            easing: [0.25, 0.1, 0.25, 1.0],
            force_reduced: false,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { transition_ms: 300, expanded_height: "12rem".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, max_files: 10 }
    }
}
