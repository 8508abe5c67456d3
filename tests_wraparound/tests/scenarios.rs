//! End-to-End Timeout Scenarios
//!
//! These tests walk a timeout through the situations a control loop sees:
//! - A deadline reached exactly on its end tick
//! - A counter reset after expiry
//! - A zero-length timeout
//! - A retry loop restarting the same period

use tests_wraparound::{count_expired_polls, start_at};

#[test]
fn test_expiry_at_end_survives_counter_reset() {
    let mut fixture = start_at(100u32, 50);
    assert_eq!(fixture.timeout.end(), 150);

    fixture.clock.set_ticks(149);
    assert!(!fixture.timeout.expired());

    fixture.clock.set_ticks(150);
    assert!(fixture.timeout.expired());

    fixture.clock.set_ticks(0);
    assert!(fixture.timeout.expired());
}

#[test]
fn test_zero_duration_is_expired_on_first_poll() {
    let mut fixture = start_at(12_345u32, 0);
    assert!(fixture.timeout.expired());
    assert!(fixture.timeout.is_disabled());
    assert_eq!(fixture.timeout.duration(), 0);
}

#[test]
fn test_retry_loop_restarts_same_period() {
    let mut fixture = start_at(0u32, 10);
    let mut attempts = 0;

    for _ in 0..3 {
        let mut polls = 0;
        while !fixture.timeout.expired() {
            fixture.clock.advance_ticks(1);
            polls += 1;
        }
        assert_eq!(polls, 10);
        attempts += 1;
        fixture.timeout.restart();
    }

    assert_eq!(attempts, 3);
    assert_eq!(fixture.timeout.start(), 30);
    assert_eq!(fixture.timeout.end(), 40);
}

#[test]
fn test_expired_poll_count_after_deadline() {
    let mut fixture = start_at(0u16, 5);
    // Ticks 1..=4 are before the deadline, 5..=20 after.
    assert_eq!(count_expired_polls(&mut fixture, 20, 1), 16);
}

#[test]
fn test_restart_with_new_period_mid_flight() {
    let mut fixture = start_at(1_000u32, 100);
    fixture.clock.advance_ticks(60);
    fixture.timeout.restart_with(20);
    assert_eq!(fixture.timeout.start(), 1_060);

    fixture.clock.advance_ticks(19);
    assert!(!fixture.timeout.expired());
    fixture.clock.advance_ticks(1);
    assert!(fixture.timeout.expired());
}
