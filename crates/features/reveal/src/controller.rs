use crate::options::RevealOptions;
use crate::visual::VisualState;
use folio_kernel::host::Subscription;
use strum::AsRefStr;

/// Slack on the visibility threshold. Browsers report the crossing entry with a ratio that
/// can land a hair under the observer's own threshold.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether a section has entered the viewport yet. Never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    NotYetVisible,
    Visible,
}

/// How a section is currently rendered; exposed as the `data-reveal` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RevealMode {
    /// Rendered in its final state without animation.
    Static,
    /// Waiting offscreen for the entrance.
    Hidden,
    /// Entrance fired.
    Visible,
}

#[derive(Debug)]
enum Phase {
    /// Waiting for the first qualifying notification. Holds the observation, if one exists yet.
    Armed(Option<Subscription>),
    /// Entered the viewport and animated in.
    Fired,
    /// Resolved without an entrance: reduced motion, or nothing to observe with.
    Settled,
}

/// One-shot entrance controller for a single section.
///
/// The viewport subscription lives inside the `Armed` phase and is torn down on the way out
/// of it, so a fired controller never hears about the viewport again.
#[derive(Debug)]
pub struct RevealController {
    phase: Phase,
    threshold: f64,
}

impl RevealController {
    /// A controller that fires once at least `threshold` of the section is visible.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { phase: Phase::Armed(None), threshold }
    }

    #[must_use]
    pub const fn state(&self) -> RevealState {
        match self.phase {
            Phase::Armed(_) => RevealState::NotYetVisible,
            Phase::Fired | Phase::Settled => RevealState::Visible,
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed(_))
    }

    /// Whether an observation is currently registered.
    #[must_use]
    pub const fn is_observing(&self) -> bool {
        matches!(self.phase, Phase::Armed(Some(_)))
    }

    /// Hands the controller the observation that will feed [`Self::notify`].
    ///
    /// `None` means the host cannot observe the viewport, and the section settles at once.
    /// A subscription arriving after the controller left `Armed` is torn down immediately.
    pub fn attach(&mut self, subscription: Option<Subscription>) {
        let Some(subscription) = subscription else {
            self.settle();
            return;
        };
        match &mut self.phase {
            Phase::Armed(slot) => {
                if let Some(previous) = slot.replace(subscription) {
                    previous.cancel();
                }
            },
            Phase::Fired | Phase::Settled => subscription.cancel(),
        }
    }

    /// Wires the controller up once its section is in the document.
    ///
    /// Under reduced motion the section settles and `observe` is never called. Otherwise an
    /// armed controller without an observation calls `observe` exactly once and keeps what it
    /// returns.
    pub fn mount(&mut self, reduced_motion: bool, observe: impl FnOnce() -> Option<Subscription>) {
        if reduced_motion {
            self.settle();
            return;
        }
        if self.is_armed() && !self.is_observing() {
            self.attach(observe());
        }
    }

    /// Feeds a viewport notification. Returns `true` only for the call that fires.
    pub fn notify(&mut self, visible_ratio: f64) -> bool {
        if !self.is_armed() || visible_ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.leave_armed(Phase::Fired);
        tracing::debug!(visible_ratio, "section entered the viewport");
        true
    }

    /// Resolves to the final state without an entrance.
    pub fn settle(&mut self) {
        if self.is_armed() {
            self.leave_armed(Phase::Settled);
        }
    }

    /// Rendering mode under the current motion preference.
    #[must_use]
    pub fn mode(&self, reduced_motion: bool) -> RevealMode {
        match self.phase {
            _ if reduced_motion => RevealMode::Static,
            Phase::Settled => RevealMode::Static,
            Phase::Armed(_) => RevealMode::Hidden,
            Phase::Fired => RevealMode::Visible,
        }
    }

    /// Pure projection of `(preference, state)` onto what the section looks like.
    #[must_use]
    pub fn visual(&self, reduced_motion: bool, options: &RevealOptions) -> VisualState {
        match self.mode(reduced_motion) {
            RevealMode::Static => VisualState::settled(options.direction),
            RevealMode::Hidden => VisualState::hidden(options),
            RevealMode::Visible => VisualState::shown(options),
        }
    }

    fn leave_armed(&mut self, next: Phase) {
        if let Phase::Armed(Some(subscription)) = std::mem::replace(&mut self.phase, next) {
            subscription.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracked() -> (Subscription, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (Subscription::new(move || inner.set(inner.get() + 1)), count)
    }

    #[test]
    fn starts_armed_and_hidden() {
        let controller = RevealController::new(0.25);
        assert_eq!(controller.state(), RevealState::NotYetVisible);
        assert_eq!(controller.mode(false), RevealMode::Hidden);
        assert!(!controller.is_observing());
    }

    #[test]
    fn fires_once_and_tears_down() {
        let (subscription, teardowns) = tracked();
        let mut controller = RevealController::new(0.25);
        controller.attach(Some(subscription));
        assert!(controller.is_observing());

        assert!(!controller.notify(0.1));
        assert_eq!(teardowns.get(), 0);

        assert!(controller.notify(0.25));
        assert_eq!(teardowns.get(), 1);
        assert_eq!(controller.state(), RevealState::Visible);

        // Leaves the viewport and comes back.
        assert!(!controller.notify(0.0));
        assert!(!controller.notify(1.0));
        assert_eq!(teardowns.get(), 1);
        assert_eq!(controller.mode(false), RevealMode::Visible);
    }

    #[test]
    fn missing_observer_settles_immediately() {
        let mut controller = RevealController::new(0.25);
        controller.attach(None);

        assert_eq!(controller.state(), RevealState::Visible);
        assert_eq!(controller.mode(false), RevealMode::Static);
        assert!(!controller.notify(1.0));
    }

    #[test]
    fn late_subscription_is_cancelled() {
        let (subscription, teardowns) = tracked();
        let mut controller = RevealController::new(0.25);
        assert!(controller.notify(0.5));

        controller.attach(Some(subscription));
        assert_eq!(teardowns.get(), 1);
        assert!(!controller.is_observing());
    }

    #[test]
    fn replacing_subscription_cancels_previous() {
        let (first, first_count) = tracked();
        let (second, second_count) = tracked();
        let mut controller = RevealController::new(0.25);

        controller.attach(Some(first));
        controller.attach(Some(second));
        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 0);

        drop(controller);
        assert_eq!(second_count.get(), 1);
    }

    #[test]
    fn settle_tears_down_pending_observation() {
        let (subscription, teardowns) = tracked();
        let mut controller = RevealController::new(0.25);
        controller.attach(Some(subscription));

        controller.settle();
        assert_eq!(teardowns.get(), 1);
        assert_eq!(controller.mode(false), RevealMode::Static);
    }

    #[test]
    fn crossing_just_under_threshold_fires() {
        let mut controller = RevealController::new(0.25);
        assert!(!controller.notify(0.2));
        assert!(controller.notify(0.2499));
        assert_eq!(controller.state(), RevealState::Visible);
    }

    #[test]
    fn mount_observes_exactly_once() {
        let (subscription, teardowns) = tracked();
        let mut subscription = Some(subscription);
        let mut calls = 0;
        let mut controller = RevealController::new(0.25);

        controller.mount(false, || {
            calls += 1;
            subscription.take()
        });
        controller.mount(false, || {
            calls += 1;
            None
        });

        assert_eq!(calls, 1);
        assert!(controller.is_observing());
        assert!(controller.notify(1.0));
        assert_eq!(teardowns.get(), 1);
    }

    #[test]
    fn mount_under_reduced_motion_never_observes() {
        let mut calls = 0;
        let mut controller = RevealController::new(0.25);

        controller.mount(true, || {
            calls += 1;
            None
        });

        assert_eq!(calls, 0);
        assert!(!controller.is_armed());
        assert_eq!(controller.mode(false), RevealMode::Static);
    }

    #[test]
    fn reduced_motion_overrides_every_phase() {
        let options = RevealOptions::default();
        let mut controller = RevealController::new(0.25);
        assert_eq!(controller.visual(true, &options), VisualState::settled(options.direction));

        controller.notify(1.0);
        assert_eq!(controller.visual(true, &options).transition, None);
    }
}
