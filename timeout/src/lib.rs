//! # Timeout
//!
//! Allocation-free, polled timeouts over wrapping tick counters.
//!
//! ## Philosophy
//!
//! **Poll, don't wait.**
//!
//! A timeout is two words of state and a tick source. The caller asks
//! "has it expired yet?" from its own control loop. There are no interrupts,
//! no callbacks and no heap.
//!
//! ## Typical Usage
//!
//! ```
//! use tick_hal::Millis;
//! use timeout::MillisTimeout;
//!
//! fn millis() -> u32 {
//!     0
//! }
//!
//! let mut timeout = MillisTimeout::new(Millis(millis), 250);
//! let mut polls = 0;
//! while !timeout.expired() && polls < 3 {
//!     polls += 1;
//! }
//! timeout.restart();
//! assert_eq!(timeout.duration(), 250);
//! ```
//!
//! ## Guarantees
//!
//! - Correct across counter wraparound, provided the counter does not wrap
//!   more than once between a start and a poll
//! - Expiry latches: once seen, it stays until restart
//! - Cancel looks exactly like a natural expiry to callers
//! - A cancelled or expired timeout remembers its duration for `restart()`
//!
//! ## Not Provided
//!
//! - Callbacks or interrupt-driven expiry
//! - Sub-tick precision
//! - Remaining time once cancelled

#![cfg_attr(not(test), no_std)]

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{SpanOf, Timeout};
pub use error::TimeoutError;
pub use state::TimeoutState;

use tick_hal::{Micros, Millis};

/// Timeout counting milliseconds from a raw source such as `fn millis() -> u32`
pub type MillisTimeout<S> = Timeout<Millis<S>>;

/// Timeout counting microseconds from a raw source such as `fn micros() -> u32`
pub type MicrosTimeout<S> = Timeout<Micros<S>>;
