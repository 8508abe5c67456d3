//! # Tick Hardware Abstraction
//!
//! This crate defines how timers see the passage of time.
//!
//! ## Philosophy
//!
//! **Time is a capability, not a global variable.**
//!
//! A timer never reads a clock on its own. It is handed a [`TickSource`]
//! and asks it for the current tick count. On hardware that is a free-running
//! counter register or a `millis()` style function; under test it is a
//! simulated clock that only moves when told to.
//!
//! ## Design Principles
//!
//! 1. **Width-generic**: Counters may be 8, 16, 32 or 64 bits wide
//! 2. **Wrapping**: Counters overflow to zero; that is part of the contract
//! 3. **Non-blocking**: Polling a source always returns immediately
//! 4. **Rate-agnostic core**: The tick rate only matters when converting
//!    to and from wall durations, see [`TickRate`]
//!
//! ## Not For
//!
//! - Wall-clock time (dates, timezones)
//! - Interrupt-driven alarms or callbacks
//! - Sleeping or blocking

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "std")]
pub mod host;
pub mod rate;
pub mod source;
pub mod tick;

pub use rate::TickRate;
pub use source::{Micros, Millis, RatedSource, TickSource};
pub use tick::{Span, Tick};
