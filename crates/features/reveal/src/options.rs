use folio_domain::Direction;
use folio_domain::config::MotionConfig;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Per-section entrance configuration.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct RevealOptions {
    #[builder(default)]
    pub direction: Direction,
    /// Wait before the transition starts.
    #[builder(default)]
    pub delay: Duration,
    #[builder(default)]
    pub motion: MotionConfig,
}

impl RevealOptions {
    /// Whether to skip the entrance: the host reports the preference or the site forces it.
    #[must_use]
    pub const fn reduced_motion(&self, host_prefers_reduced: bool) -> bool {
        self.motion.force_reduced || host_prefers_reduced
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.motion.duration_ms)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
