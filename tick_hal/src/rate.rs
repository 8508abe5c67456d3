//! Tick rate configuration

use core::num::NonZeroU32;
use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Ticks per second of a tick source
///
/// The core timer logic never looks at the rate. It is only used to turn a
/// wall [`Duration`] into a tick count and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickRate {
    hz: NonZeroU32,
}

impl TickRate {
    /// One tick per millisecond
    pub const MILLIS: Self = Self::from_hz_const(1_000);

    /// One tick per microsecond
    pub const MICROS: Self = Self::from_hz_const(1_000_000);

    const fn from_hz_const(hz: u32) -> Self {
        match NonZeroU32::new(hz) {
            Some(hz) => Self { hz },
            None => panic!("tick rate must be non-zero"),
        }
    }

    /// Creates a rate from a tick frequency
    ///
    /// Returns `None` for a zero frequency.
    pub const fn from_hz(hz: u32) -> Option<Self> {
        match NonZeroU32::new(hz) {
            Some(hz) => Some(Self { hz }),
            None => None,
        }
    }

    /// Returns the tick frequency in hertz
    pub const fn hz(self) -> u32 {
        self.hz.get()
    }

    /// Number of ticks covering `duration`
    ///
    /// Rounds up, so a timer armed with the result never fires before
    /// `duration` has passed. Saturates at `u64::MAX`.
    pub fn ticks_for(self, duration: Duration) -> u64 {
        let ticks = (duration.as_nanos() * u128::from(self.hz.get())).div_ceil(NANOS_PER_SEC);
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }

    /// Wall duration of `ticks` at this rate, rounded down to the nanosecond
    pub fn duration_for(self, ticks: u64) -> Duration {
        let hz = u64::from(self.hz.get());
        let secs = ticks / hz;
        let nanos = (ticks % hz) * 1_000_000_000 / hz;
        Duration::new(secs, nanos as u32)
    }
}
