//! Wraparound Test Utilities
//!
//! This crate provides shared utilities for timeout integration tests.
//!
//! ## Test Philosophy
//!
//! - **Drive the counter, not the clock**: Every test moves a simulated
//!   counter to the exact tick it cares about
//! - **Wrap on purpose**: The interesting cases sit right at the overflow
//!   point of the counter width
//! - **Observable behavior only**: Tests go through the public timeout API

use sim_clock::SimClock;
use tick_hal::Tick;
use timeout::{SpanOf, Timeout};

/// A simulated clock and a timeout started on it
pub struct TimeoutFixture<T: Tick> {
    /// Handle onto the clock the timeout polls
    pub clock: SimClock<T>,
    /// Timeout under test
    pub timeout: Timeout<SimClock<T>>,
}

/// Starts a timeout at `tick` with `duration`
pub fn start_at<T: Tick>(tick: T, duration: SpanOf<SimClock<T>>) -> TimeoutFixture<T> {
    let clock = SimClock::with_initial_ticks(tick);
    let timeout = Timeout::new(clock.clone(), duration);
    TimeoutFixture { clock, timeout }
}

/// Starts a timeout whose deadline lands `after_wrap` ticks past zero
///
/// The start tick sits `before_wrap` ticks below the counter maximum.
pub fn start_across_wrap(before_wrap: u32, after_wrap: u32) -> TimeoutFixture<u32> {
    let start = u32::MAX - before_wrap;
    let duration = (before_wrap + 1 + after_wrap) as i32;
    let fixture = start_at(start, duration);
    log::debug!(
        "fixture start {} end {}",
        fixture.timeout.start(),
        fixture.timeout.end()
    );
    fixture
}

/// Advances the clock by `step` and polls, `rounds` times
///
/// Returns the number of polls that reported expired.
pub fn count_expired_polls<T: Tick>(fixture: &mut TimeoutFixture<T>, rounds: u32, step: T) -> u32 {
    let mut expired = 0;
    for _ in 0..rounds {
        fixture.clock.advance_ticks(step);
        if fixture.timeout.expired() {
            expired += 1;
        }
    }
    expired
}
