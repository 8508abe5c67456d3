//! # Simulated Tick Clock
//!
//! Deterministic tick source for testing timers.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! This clock provides controllable, deterministic time progression.
//! Unlike a hardware counter, it only advances when explicitly told to.
//! It wraps at its counter width exactly like the real thing, so
//! wraparound behavior can be driven to the exact tick.
//!
//! ## Use Cases
//!
//! - Unit tests that need predictable timing
//! - Driving a counter across its overflow point
//! - Simulating a counter reset back to zero

use std::cell::Cell;
use std::rc::Rc;

use tick_hal::{Tick, TickSource};

/// Simulated tick counter with controllable time progression
///
/// Clones are handles onto the same counter: hand one to a timer and keep
/// another to move time forward.
///
/// # Examples
///
/// ```
/// use sim_clock::SimClock;
/// use tick_hal::TickSource;
///
/// let clock = SimClock::<u32>::new();
/// let handle = clock.clone();
/// assert_eq!(clock.poll_ticks(), 0);
///
/// handle.advance_ticks(100);
/// assert_eq!(clock.poll_ticks(), 100);
///
/// handle.set_ticks(u32::MAX);
/// handle.advance_ticks(1);
/// assert_eq!(clock.poll_ticks(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimClock<T: Tick = u32> {
    /// Current tick count, shared between handles
    ticks: Rc<Cell<T>>,
}

impl<T: Tick> SimClock<T> {
    /// Creates a new simulated clock starting at tick 0
    pub fn new() -> Self {
        Self::with_initial_ticks(T::default())
    }

    /// Creates a new simulated clock starting at a specific tick count
    ///
    /// Useful for tests that start close to the wrap point.
    pub fn with_initial_ticks(ticks: T) -> Self {
        Self {
            ticks: Rc::new(Cell::new(ticks)),
        }
    }

    /// Advances the clock by the specified number of ticks
    ///
    /// Wraps to zero past `T::MAX`, like a hardware counter.
    pub fn advance_ticks(&self, delta: T) {
        self.ticks.set(self.ticks.get().wrapping_add_ticks(delta));
    }

    /// Sets the clock to a specific tick count
    ///
    /// Any value is accepted. Setting a value below the current one
    /// simulates a wrap or a counter reset.
    pub fn set_ticks(&self, ticks: T) {
        self.ticks.set(ticks);
    }

    /// Returns the current tick count
    pub fn current_ticks(&self) -> T {
        self.ticks.get()
    }
}

impl<T: Tick> TickSource for SimClock<T> {
    type Tick = T;

    fn poll_ticks(&self) -> T {
        self.ticks.get()
    }
}
