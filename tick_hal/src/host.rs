//! Host tick sources
//!
//! Free-running 32-bit counters backed by [`std::time::Instant`], for running
//! timers off-target. They count from the first call in the process and wrap
//! exactly like a microcontroller's `millis()` and `micros()` counters:
//! `millis()` wraps after about 49.7 days, `micros()` after about 71.6
//! minutes.

use std::sync::OnceLock;
use std::time::Instant;

use crate::rate::TickRate;
use crate::source::{Micros, Millis};

fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

fn ticks_at(rate: TickRate) -> u32 {
    let nanos = epoch().elapsed().as_nanos();
    // Truncation is the wrap.
    (nanos * u128::from(rate.hz()) / 1_000_000_000) as u32
}

/// Milliseconds since the host epoch, modulo `2^32`
pub fn millis() -> u32 {
    ticks_at(TickRate::MILLIS)
}

/// Microseconds since the host epoch, modulo `2^32`
pub fn micros() -> u32 {
    ticks_at(TickRate::MICROS)
}

/// Millisecond source over the host clock
pub const fn millis_source() -> Millis<fn() -> u32> {
    Millis(millis)
}

/// Microsecond source over the host clock
pub const fn micros_source() -> Micros<fn() -> u32> {
    Micros(micros)
}
