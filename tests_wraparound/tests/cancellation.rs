//! Cancellation and Unbounded Timeout Tests
//!
//! Validates that cancel is indistinguishable from natural expiry, that
//! unbounded timeouts only end on cancel, and that the armed duration
//! survives both.

use tests_wraparound::start_at;
use timeout::{Timeout, TimeoutState};

#[test]
fn test_forever_only_expires_on_cancel() {
    let mut fixture = start_at(0u32, i32::MAX);
    assert!(fixture.timeout.is_forever());

    for _ in 0..8 {
        fixture.clock.advance_ticks(u32::MAX / 5);
        assert!(!fixture.timeout.expired());
    }

    fixture.timeout.cancel();
    assert!(fixture.timeout.expired());
    fixture.clock.advance_ticks(12_345);
    assert!(fixture.timeout.expired());
}

#[test]
fn test_cancel_looks_like_expiry() {
    let mut natural = start_at(0u32, 5);
    natural.clock.advance_ticks(5);
    assert!(natural.timeout.expired());

    let mut cancelled = start_at(0u32, 5);
    cancelled.timeout.cancel();
    assert!(cancelled.timeout.expired());

    assert_eq!(natural.timeout.state(), cancelled.timeout.state());
    assert_eq!(natural.timeout.end(), cancelled.timeout.end());
    assert_eq!(natural.timeout.remaining(), cancelled.timeout.remaining());
}

#[test]
fn test_cancel_twice_matches_cancel_once() {
    let mut once = start_at(40u32, 75);
    once.timeout.cancel();

    let mut twice = start_at(40u32, 75);
    twice.timeout.cancel();
    twice.timeout.cancel();

    assert_eq!(once.timeout.state(), twice.timeout.state());
    assert_eq!(twice.timeout.duration(), 75);
}

#[test]
fn test_cancel_then_restart_rearms_original_duration() {
    let mut fixture = start_at(0u32, 50);
    fixture.clock.advance_ticks(20);
    fixture.timeout.cancel();
    assert!(fixture.timeout.expired());

    fixture.timeout.restart();
    assert_eq!(fixture.timeout.start(), 20);
    assert_eq!(fixture.timeout.end(), 70);

    fixture.clock.advance_ticks(49);
    assert!(!fixture.timeout.expired());
    fixture.clock.advance_ticks(1);
    assert!(fixture.timeout.expired());
}

#[test]
fn test_cancelled_state_packs_to_ones_complement() {
    let mut fixture = start_at(0u32, 50);
    assert_eq!(fixture.timeout.state().to_raw(), 50);

    fixture.timeout.cancel();
    let raw = fixture.timeout.state().to_raw();
    assert_eq!(raw, -1 - 50);
    assert_eq!(TimeoutState::from_raw(raw).duration(), 50);

    let mut zero = start_at(0u32, 0);
    zero.timeout.cancel();
    assert_eq!(zero.timeout.state().to_raw(), -1);
    assert_eq!(TimeoutState::from_raw(-1i32), TimeoutState::Disabled(0));
}

#[test]
fn test_cancelled_forever_restarts_as_forever() {
    let mut fixture = start_at(7u64, i64::MAX);
    fixture.timeout.cancel();
    assert_eq!(fixture.timeout.duration(), Timeout::<sim_clock::SimClock<u64>>::FOREVER);
    assert_eq!(fixture.timeout.state().to_raw(), i64::MIN);

    fixture.timeout.restart();
    assert!(fixture.timeout.is_forever());
    assert!(!fixture.timeout.expired());
}
