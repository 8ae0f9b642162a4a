use folio_domain::{Axis, Direction};
use folio_kernel::host::Subscription;
use folio_reveal::{
    RATIO_TOLERANCE, RevealController, RevealMode, RevealOptions, RevealState, offset_for,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn fires_at_most_once(ratios in proptest::collection::vec(0.0_f64..=1.0, 0..64)) {
        let teardowns = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&teardowns);
        let mut controller = RevealController::new(0.25);
        controller.attach(Some(Subscription::new(move || counter.set(counter.get() + 1))));

        let fired = ratios.iter().filter(|&&ratio| controller.notify(ratio)).count();
        let should_fire = ratios.iter().any(|&ratio| ratio + RATIO_TOLERANCE >= 0.25);

        prop_assert_eq!(fired, usize::from(should_fire));
        prop_assert_eq!(teardowns.get(), u32::from(should_fire));
        prop_assert_eq!(
            controller.state(),
            if should_fire { RevealState::Visible } else { RevealState::NotYetVisible }
        );
    }

    #[test]
    fn visible_state_never_regresses(ratios in proptest::collection::vec(0.0_f64..=1.0, 1..32)) {
        let mut controller = RevealController::new(0.25);
        let mut seen_visible = false;
        for ratio in ratios {
            controller.notify(ratio);
            let visible = controller.state() == RevealState::Visible;
            prop_assert!(!(seen_visible && !visible));
            seen_visible |= visible;
        }
    }

    #[test]
    fn initial_offset_follows_the_table(direction in direction(), distance in 0.0_f64..200.0) {
        let offset = offset_for(direction, distance);
        let expected_axis = match direction {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        };
        let expected = match direction {
            Direction::Up | Direction::Left => -distance,
            Direction::Down | Direction::Right => distance,
        };
        prop_assert_eq!(offset.axis, expected_axis);
        prop_assert!((offset.value - expected).abs() < 1e-9);
    }

    #[test]
    fn reduced_motion_is_always_settled(direction in direction(), fire in any::<bool>()) {
        let options = RevealOptions::builder().direction(direction).build();
        let mut controller = RevealController::new(options.motion.threshold);
        if fire {
            controller.notify(1.0);
        }

        let visual = controller.visual(true, &options);
        prop_assert_eq!(controller.mode(true), RevealMode::Static);
        prop_assert!(visual.transition.is_none());
        prop_assert!(visual.offset.is_zero());
        prop_assert!((visual.opacity - 1.0).abs() < f64::EPSILON);
    }
}

#[test]
fn default_render_starts_at_forty_units() {
    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let options = RevealOptions::builder().direction(direction).build();
        let visual = RevealController::new(0.25).visual(false, &options);

        assert!(visual.opacity.abs() < f64::EPSILON);
        assert!((visual.offset.value.abs() - 40.0).abs() < f64::EPSILON);
        assert_eq!(visual.offset.axis, direction.axis());
    }
}

#[test]
fn forced_reduced_motion_mounts_without_observing() {
    let mut options = RevealOptions::default();
    options.motion.force_reduced = true;
    let observed = Cell::new(0_u32);

    for host_prefers_reduced in [false, true] {
        let mut controller = RevealController::new(options.motion.threshold);
        controller.mount(options.reduced_motion(host_prefers_reduced), || {
            observed.set(observed.get() + 1);
            None
        });
        assert_eq!(controller.mode(false), RevealMode::Static);
    }

    assert_eq!(observed.get(), 0);
}

#[test]
fn animated_mount_observes_once_per_section() {
    let options = RevealOptions::default();
    let observed = Cell::new(0_u32);
    let mut controller = RevealController::new(options.motion.threshold);

    // A remount of the same element must not stack observers.
    for _ in 0..3 {
        controller.mount(options.reduced_motion(false), || {
            observed.set(observed.get() + 1);
            Some(Subscription::new(|| {}))
        });
    }

    assert_eq!(observed.get(), 1);
    assert!(controller.is_observing());
    assert!(controller.notify(options.motion.threshold - RATIO_TOLERANCE / 2.0));
    assert!(!controller.is_observing());
}
