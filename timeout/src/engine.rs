//! # Expiry Engine
//!
//! A polled timeout over a wrapping tick counter.
//!
//! ## Wraparound
//!
//! The deadline is `start + duration` modulo `2^width`. Two different things
//! can overflow: the deadline value itself, and the live counter. Both are
//! detected by comparing against `start`, so no wider arithmetic is needed:
//!
//! | Deadline wrapped | Clock wrapped | Expired when       |
//! |------------------|---------------|--------------------|
//! | yes              | no            | never (yet)        |
//! | no               | yes           | always             |
//! | yes              | yes           | `now >= end`       |
//! | no               | no            | `now >= end`       |
//!
//! This is only correct while the counter wraps at most once between the
//! start and an `expired()` poll. Once expiry is seen it is latched, so later
//! wraps cannot make the timeout un-expire.

use core::time::Duration;

use log::{trace, warn};
use tick_hal::{RatedSource, Span, Tick, TickSource};

use crate::error::TimeoutError;
use crate::state::TimeoutState;

/// Signed duration type of a tick source
pub type SpanOf<S> = <<S as TickSource>::Tick as Tick>::Span;

/// Polled timeout over an injected tick source
///
/// # Examples
///
/// ```
/// use sim_clock::SimClock;
/// use timeout::Timeout;
///
/// let clock = SimClock::with_initial_ticks(100u32);
/// let mut timeout = Timeout::new(clock.clone(), 50);
/// assert_eq!(timeout.end(), 150);
///
/// clock.set_ticks(149);
/// assert!(!timeout.expired());
///
/// clock.set_ticks(150);
/// assert!(timeout.expired());
///
/// // Latched, even if the counter resets.
/// clock.set_ticks(0);
/// assert!(timeout.expired());
/// ```
#[derive(Debug, Clone)]
pub struct Timeout<S: TickSource> {
    source: S,
    start: S::Tick,
    state: TimeoutState<SpanOf<S>>,
}

impl<S: TickSource> Timeout<S> {
    /// Duration of a timeout that only expires when cancelled
    pub const FOREVER: SpanOf<S> = <SpanOf<S> as Span>::FOREVER;

    /// Starts a timeout expiring `duration` ticks from now
    ///
    /// A zero duration is already expired. [`Timeout::FOREVER`] never
    /// expires on its own. A negative duration is clamped to zero; use
    /// [`Timeout::try_new`] to reject it instead.
    pub fn new(source: S, duration: SpanOf<S>) -> Self {
        let start = source.poll_ticks();
        Self {
            source,
            start,
            state: TimeoutState::armed(non_negative(duration)),
        }
    }

    /// Starts a timeout, rejecting negative durations
    pub fn try_new(source: S, duration: SpanOf<S>) -> Result<Self, TimeoutError> {
        check_duration(duration)?;
        Ok(Self::new(source, duration))
    }

    /// Starts a timeout that has already expired
    pub fn expired_now(source: S) -> Self {
        Self::new(source, <SpanOf<S> as Span>::ZERO)
    }

    /// Starts a timeout that only expires when cancelled
    pub fn forever(source: S) -> Self {
        Self::new(source, Self::FOREVER)
    }

    /// Starts the timeout again with the duration it was last armed with
    ///
    /// Works after a cancel or a detected expiry as well.
    pub fn restart(&mut self) {
        let duration = self.state.duration();
        self.restart_with(duration);
    }

    /// Starts the timeout again with a different duration
    ///
    /// Negative durations are clamped to zero like in [`Timeout::new`].
    pub fn restart_with(&mut self, duration: SpanOf<S>) {
        self.state = TimeoutState::armed(non_negative(duration));
        self.start = self.source.poll_ticks();
        trace!("timeout restarted at tick {} for {} ticks", self.start, duration);
    }

    /// Starts the timeout again, rejecting negative durations
    ///
    /// The timeout is left untouched on error.
    pub fn try_restart_with(&mut self, duration: SpanOf<S>) -> Result<(), TimeoutError> {
        check_duration(duration)?;
        self.restart_with(duration);
        Ok(())
    }

    /// Has the timeout expired yet?
    ///
    /// Handles counter wraps as long as the counter does not cycle all the
    /// way back to the start tick between polls. Once expiry has been seen
    /// the timeout reports expired until restarted.
    pub fn expired(&mut self) -> bool {
        let duration = match self.state {
            TimeoutState::Forever => return false,
            TimeoutState::Disabled(_) => return true,
            TimeoutState::Armed(duration) => duration,
        };

        let now = self.source.poll_ticks();
        let end = self.start.wrapping_add_span(duration);
        if !deadline_reached(self.start, end, now) {
            return false;
        }

        self.state = self.state.disabled();
        trace!(
            "timeout expired at tick {} (start {}, {} ticks)",
            now,
            self.start,
            duration
        );
        true
    }

    /// Forces the timeout to expired
    ///
    /// Idempotent. The armed duration is kept for [`Timeout::restart`].
    pub fn cancel(&mut self) {
        if !self.state.is_disabled() {
            self.state = self.state.disabled();
            trace!("timeout cancelled (start {})", self.start);
        }
    }

    /// Ticks left until the deadline
    ///
    /// `None` once cancelled or expired, and for unbounded timeouts.
    /// `Some(0)` if the deadline has passed but [`Timeout::expired`] has not
    /// been polled yet. Does not latch.
    pub fn remaining(&self) -> Option<SpanOf<S>> {
        let TimeoutState::Armed(duration) = self.state else {
            return None;
        };
        let end = self.start.wrapping_add_span(duration);
        let now = self.source.poll_ticks();
        if deadline_reached(self.start, end, now) {
            Some(<SpanOf<S> as Span>::ZERO)
        } else {
            Some(end.ticks_since(now).to_span())
        }
    }

    /// Ticks since the last start, modulo the counter width
    pub fn elapsed(&self) -> S::Tick {
        self.source.poll_ticks().ticks_since(self.start)
    }

    /// The duration the timeout was armed with
    ///
    /// Unchanged by cancel or expiry. [`Timeout::FOREVER`] for unbounded
    /// timeouts.
    pub fn duration(&self) -> SpanOf<S> {
        self.state.duration()
    }

    /// Tick at which the timeout was last started
    pub fn start(&self) -> S::Tick {
        self.start
    }

    /// Tick at which the timeout expires
    ///
    /// May be numerically below [`Timeout::start`] when the deadline wraps.
    /// Equals the start when disabled or unbounded.
    pub fn end(&self) -> S::Tick {
        match self.state {
            TimeoutState::Armed(duration) => self.start.wrapping_add_span(duration),
            TimeoutState::Forever | TimeoutState::Disabled(_) => self.start,
        }
    }

    /// Returns true for a timeout that never expires on its own
    pub fn is_forever(&self) -> bool {
        self.state.is_forever()
    }

    /// Returns true once cancelled or seen as expired
    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    /// Current state
    pub fn state(&self) -> TimeoutState<SpanOf<S>> {
        self.state
    }

    /// The tick source this timeout polls
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the tick source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the timeout, returning its tick source
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RatedSource> Timeout<S> {
    /// Starts a timeout expiring after a wall duration
    ///
    /// Rounds up to whole ticks at the source's rate. A duration too long
    /// for the span type becomes [`Timeout::FOREVER`].
    pub fn from_duration(source: S, duration: Duration) -> Self {
        Self::new(source, span_for(S::RATE.ticks_for(duration)))
    }

    /// Starts the timeout again with a different wall duration
    pub fn restart_with_duration(&mut self, duration: Duration) {
        self.restart_with(span_for(S::RATE.ticks_for(duration)));
    }

    /// Wall time left until the deadline, see [`Timeout::remaining`]
    pub fn remaining_duration(&self) -> Option<Duration> {
        self.remaining()
            .map(|ticks| S::RATE.duration_for(ticks.to_i64() as u64))
    }
}

impl<S: TickSource + Default> Default for Timeout<S> {
    /// An already expired timeout over a default source
    fn default() -> Self {
        Self::expired_now(S::default())
    }
}

fn span_for<D: Span>(ticks: u64) -> D {
    D::saturating_from_u64(ticks)
}

fn non_negative<D: Span>(duration: D) -> D {
    if duration.is_negative() {
        warn!("negative timeout duration {} clamped to zero", duration);
        D::ZERO
    } else {
        duration
    }
}

fn check_duration<D: Span>(duration: D) -> Result<(), TimeoutError> {
    if duration.is_negative() {
        return Err(TimeoutError::NegativeDuration(duration.to_i64()));
    }
    Ok(())
}

fn deadline_reached<T: Tick>(start: T, end: T, now: T) -> bool {
    // Deadline wrapped, clock has not caught up with the wrap.
    if end < start && now >= start {
        return false;
    }
    // Clock wrapped, deadline did not.
    if end >= start && now < start {
        return true;
    }
    now >= end
}
