//! # Tick Sources
//!
//! Hardware abstraction for the counter a timer polls.
//!
//! A [`TickSource`] is anything that can report the current tick count:
//! a counter register, a platform `millis()` function, or a simulated clock.
//! Any `Fn() -> T` closure or function pointer is already a source, so a
//! platform counter can be injected without a wrapper type.
//!
//! [`Millis`] and [`Micros`] tag a raw source with its tick rate. Timers
//! built on them know how to convert wall durations into ticks.

use crate::rate::TickRate;
use crate::tick::Tick;

/// Monotonic, wrapping tick counter
///
/// # Implementation Notes
///
/// - Must not block
/// - Must increase at a fixed rate
/// - Must wrap to zero after [`Tick::MAX`]
///
/// # Examples
///
/// ```
/// use tick_hal::TickSource;
///
/// fn platform_millis() -> u32 {
///     1234
/// }
///
/// assert_eq!(platform_millis.poll_ticks(), 1234);
/// ```
pub trait TickSource {
    /// Counter width of this source
    type Tick: Tick;

    /// Returns the current tick count
    fn poll_ticks(&self) -> Self::Tick;
}

impl<T, F> TickSource for F
where
    T: Tick,
    F: Fn() -> T,
{
    type Tick = T;

    #[inline]
    fn poll_ticks(&self) -> T {
        self()
    }
}

/// A tick source with a known, fixed rate
pub trait RatedSource: TickSource {
    /// Ticks per second
    const RATE: TickRate;
}

/// Millisecond-rate tick source
///
/// Wraps a raw source such as `fn millis() -> u32`. Wrapping a function item
/// keeps the timer zero-sized apart from its own state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Millis<S>(pub S);

/// Microsecond-rate tick source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Micros<S>(pub S);

impl<S: TickSource> TickSource for Millis<S> {
    type Tick = S::Tick;

    #[inline]
    fn poll_ticks(&self) -> S::Tick {
        self.0.poll_ticks()
    }
}

impl<S: TickSource> RatedSource for Millis<S> {
    const RATE: TickRate = TickRate::MILLIS;
}

impl<S: TickSource> TickSource for Micros<S> {
    type Tick = S::Tick;

    #[inline]
    fn poll_ticks(&self) -> S::Tick {
        self.0.poll_ticks()
    }
}

impl<S: TickSource> RatedSource for Micros<S> {
    const RATE: TickRate = TickRate::MICROS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counter that advances by a fixed step on every poll
    struct SteppingCounter {
        ticks: Cell<u16>,
        step: u16,
    }

    impl TickSource for SteppingCounter {
        type Tick = u16;

        fn poll_ticks(&self) -> u16 {
            let now = self.ticks.get();
            self.ticks.set(now.wrapping_add(self.step));
            now
        }
    }

    fn fixed_counter() -> u32 {
        42
    }

    #[test]
    fn test_function_item_is_source() {
        assert_eq!(fixed_counter.poll_ticks(), 42);
    }

    #[test]
    fn test_closure_is_source() {
        let base = Cell::new(7u8);
        let source = || base.get();
        assert_eq!(source.poll_ticks(), 7);
        base.set(8);
        assert_eq!(source.poll_ticks(), 8);
    }

    #[test]
    fn test_custom_source_wraps() {
        let counter = SteppingCounter {
            ticks: Cell::new(u16::MAX - 1),
            step: 1,
        };
        assert_eq!(counter.poll_ticks(), u16::MAX - 1);
        assert_eq!(counter.poll_ticks(), u16::MAX);
        assert_eq!(counter.poll_ticks(), 0);
    }

    #[test]
    fn test_rate_tags() {
        let millis = Millis(fixed_counter);
        let micros = Micros(fixed_counter as fn() -> u32);
        assert_eq!(millis.poll_ticks(), 42);
        assert_eq!(micros.poll_ticks(), 42);
        assert_eq!(<Millis<fn() -> u32> as RatedSource>::RATE, TickRate::MILLIS);
        assert_eq!(<Micros<fn() -> u32> as RatedSource>::RATE, TickRate::MICROS);
    }

    #[test]
    fn test_millis_over_function_item_is_zero_sized() {
        let millis = Millis(fixed_counter);
        assert_eq!(core::mem::size_of_val(&millis), 0);
    }
}
