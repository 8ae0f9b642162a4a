use crate::options::RevealOptions;
use folio_domain::{Axis, Direction};
use std::fmt::Write as _;
use std::time::Duration;

/// Displacement along one axis, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub axis: Axis,
    pub value: f64,
}

impl Offset {
    #[must_use]
    pub const fn zero(axis: Axis) -> Self {
        Self { axis, value: 0.0 }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.abs() < f64::EPSILON
    }

    fn transform(&self) -> String {
        if self.is_zero() {
            return "none".to_owned();
        }
        let func = match self.axis {
            Axis::X => "translateX",
            Axis::Y => "translateY",
        };
        format!("{func}({}px)", self.value)
    }
}

/// Starting offset of a section entering from `direction`.
///
/// | direction | axis | start       |
/// |-----------|------|-------------|
/// | up        | y    | -distance   |
/// | down      | y    | +distance   |
/// | left      | x    | -distance   |
/// | right     | x    | +distance   |
#[must_use]
pub fn offset_for(direction: Direction, distance: f64) -> Offset {
    Offset { axis: direction.axis(), value: direction.sign() * distance }
}

/// Timing of the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: [f64; 4],
}

impl TransitionSpec {
    fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.easing;
        let timing = format!(
            "{}ms cubic-bezier({x1}, {y1}, {x2}, {y2}) {}ms",
            self.duration.as_millis(),
            self.delay.as_millis()
        );
        format!("opacity {timing}, transform {timing}")
    }
}

/// What a revealed section looks like at one point in its life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub offset: Offset,
    pub transition: Option<TransitionSpec>,
}

impl VisualState {
    /// Final state with nothing to animate.
    #[must_use]
    pub fn settled(direction: Direction) -> Self {
        Self { opacity: 1.0, offset: Offset::zero(direction.axis()), transition: None }
    }

    /// Before the section has entered the viewport.
    #[must_use]
    pub fn hidden(options: &RevealOptions) -> Self {
        Self {
            opacity: 0.0,
            offset: offset_for(options.direction, options.motion.distance),
            transition: Some(transition(options)),
        }
    }

    /// After the entrance fired; the transition stays attached so the change animates.
    #[must_use]
    pub fn shown(options: &RevealOptions) -> Self {
        Self {
            opacity: 1.0,
            offset: Offset::zero(options.direction.axis()),
            transition: Some(transition(options)),
        }
    }

    /// Inline CSS declarations for this state.
    #[must_use]
    pub fn style(&self) -> String {
        let mut css = format!("opacity: {}; transform: {};", self.opacity, self.offset.transform());
        if let Some(transition) = &self.transition {
            let _ = write!(css, " transition: {};", transition.css());
        }
        css
    }
}

fn transition(options: &RevealOptions) -> TransitionSpec {
    TransitionSpec {
        duration: options.duration(),
        delay: options.delay,
        easing: options.motion.easing,
    }
}
