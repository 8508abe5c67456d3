//! # Tick Counters
//!
//! Unsigned counter widths and their signed span counterparts.
//!
//! A [`Tick`] is a raw reading of a free-running counter. It increments at a
//! fixed rate and wraps modulo `2^width`. A [`Span`] is a signed tick count of
//! the same width, used for timer durations. The span is one bit narrower in
//! usable magnitude, and its maximum value is reserved as [`Span::FOREVER`].

use core::fmt;
use core::hash::Hash;

/// Signed tick count paired with a [`Tick`] width
///
/// Durations are non-negative in normal use. The sign is kept so that the
/// one's complement packing `-1 - d` stays available to callers that store a
/// timer state in a single word.
pub trait Span: Copy + Ord + Hash + Default + fmt::Debug + fmt::Display {
    /// Zero ticks
    const ZERO: Self;

    /// Largest representable span, reserved for timers that never expire
    const FOREVER: Self;

    /// Returns true if the span is below zero
    fn is_negative(self) -> bool;

    /// One's complement negation, `-1 - self`
    ///
    /// This is a bijection on the full signed range and its own inverse:
    /// `x.invert().invert() == x` for every `x`, including `ZERO` and
    /// `FOREVER`.
    fn invert(self) -> Self;

    /// Widens the span for reporting
    fn to_i64(self) -> i64;

    /// Converts an unsigned tick count, saturating at [`Span::FOREVER`]
    fn saturating_from_u64(ticks: u64) -> Self;
}

/// Unsigned counter reading
///
/// All arithmetic is modular; callers must never assume that a later tick is
/// numerically larger than an earlier one.
pub trait Tick: Copy + Ord + Hash + Default + fmt::Debug + fmt::Display {
    /// Signed span of the same width
    type Span: Span;

    /// Largest counter value before the wrap to zero
    const MAX: Self;

    /// `self + span` modulo `2^width`
    ///
    /// `span` must be non-negative.
    fn wrapping_add_span(self, span: Self::Span) -> Self;

    /// `self + delta` modulo `2^width`
    fn wrapping_add_ticks(self, delta: Self) -> Self;

    /// Ticks from `earlier` to `self`, modulo `2^width`
    fn ticks_since(self, earlier: Self) -> Self;

    /// Reinterprets a tick distance as a span, saturating at [`Span::FOREVER`]
    fn to_span(self) -> Self::Span;

    /// Widens the counter value
    fn to_u64(self) -> u64;
}

macro_rules! impl_tick {
    ($($tick:ty => $span:ty),* $(,)?) => {
        $(
            impl Span for $span {
                const ZERO: Self = 0;
                const FOREVER: Self = <$span>::MAX;

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn invert(self) -> Self {
                    -1 - self
                }

                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn saturating_from_u64(ticks: u64) -> Self {
                    if ticks >= <$span>::MAX as u64 {
                        <$span>::MAX
                    } else {
                        ticks as $span
                    }
                }
            }

            impl Tick for $tick {
                type Span = $span;

                const MAX: Self = <$tick>::MAX;

                #[inline]
                fn wrapping_add_span(self, span: $span) -> Self {
                    self.wrapping_add(span as $tick)
                }

                #[inline]
                fn wrapping_add_ticks(self, delta: Self) -> Self {
                    self.wrapping_add(delta)
                }

                #[inline]
                fn ticks_since(self, earlier: Self) -> Self {
                    self.wrapping_sub(earlier)
                }

                #[inline]
                fn to_span(self) -> $span {
                    if self >= <$span>::MAX as $tick {
                        <$span>::MAX
                    } else {
                        self as $span
                    }
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_tick!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);
