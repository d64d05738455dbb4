//! Safety tests for the H-bridge driver.
//!
//! Asserting both direction enables at once would short the bridge
//! (shoot-through), so these tests check the invariant at every recorded
//! write, not just at final steady states.


use hbridge_dc_motor_rs::Motor;
use test_utils::{rig, Event, Journal, Line};

/// Replays the journal and asserts that the two direction lines were never
/// high at the same time, at any point between writes.
fn assert_no_dual_assert(journal: &Journal) {
    let mut forward = false;
    let mut reverse = false;
    for (index, event) in journal.borrow().iter().enumerate() {
        if let Event::Level(line, level) = *event {
            match line {
                Line::Forward => forward = level,
                Line::Reverse => reverse = level,
            }
            assert!(
                !(forward && reverse),
                "both direction lines high after write {index}: {event:?}"
            );
        }
    }
}

/// Direction reversal must drop the outgoing enable before raising the
/// incoming one.
#[test]
fn test_no_dual_assert_on_reversal() {
    let (forward, reverse, pwm, journal) = rig();
    let mut motor = Motor::new(forward, reverse, pwm).unwrap();

    motor.set_speed(200).unwrap();
    motor.set_speed(-150).unwrap();

    assert_no_dual_assert(&journal);
}

/// The invariant holds across every sign transition, including full-scale
/// flips and stops in between.
#[test]
fn test_no_dual_assert_across_command_sequence() {
    let (forward, reverse, pwm, journal) = rig();
    let mut motor = Motor::new(forward, reverse, pwm).unwrap();

    for speed in [200, -150, 0, 255, -255, 1, -1, 0, -64, 64] {
        motor.set_speed(speed).unwrap();
    }

    assert_no_dual_assert(&journal);
}

/// Construction alone must leave the bridge de-energised.
#[test]
fn test_no_dual_assert_after_construction() {
    let (forward, reverse, pwm, journal) = rig();
    let _motor = Motor::new(forward, reverse, pwm).unwrap();

    assert_no_dual_assert(&journal);
}
