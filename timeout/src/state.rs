//! # Timeout State
//!
//! The three states a timeout can be in, and their packed single-word form.
//!
//! | State         | Meaning                                        | Packed     |
//! |---------------|------------------------------------------------|------------|
//! | `Armed(d)`    | Expires `d` ticks after start                  | `d`        |
//! | `Forever`     | Never expires on its own                       | `FOREVER`  |
//! | `Disabled(d)` | Cancelled or already seen as expired           | `-1 - d`   |
//!
//! A disabled timeout remembers the duration it was armed with so that a
//! plain restart can re-arm it.

use tick_hal::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeoutState<D> {
    /// Running with a finite duration
    Armed(D),
    /// Running with no end
    Forever,
    /// Latched expired; holds the duration it was armed with
    Disabled(D),
}

impl<D: Span> TimeoutState<D> {
    /// State for a freshly armed timeout
    ///
    /// `D::FOREVER` arms an unbounded timeout.
    pub fn armed(duration: D) -> Self {
        if duration == D::FOREVER {
            Self::Forever
        } else {
            Self::Armed(duration)
        }
    }

    /// Returns true for an unbounded timeout
    pub fn is_forever(self) -> bool {
        matches!(self, Self::Forever)
    }

    /// Returns true once cancelled or seen as expired
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled(_))
    }

    /// The duration the timeout was armed with, in any state
    pub fn duration(self) -> D {
        match self {
            Self::Armed(duration) | Self::Disabled(duration) => duration,
            Self::Forever => D::FOREVER,
        }
    }

    /// The latched form of this state
    pub fn disabled(self) -> Self {
        match self {
            Self::Armed(duration) => Self::Disabled(duration),
            Self::Forever => Self::Disabled(D::FOREVER),
            disabled @ Self::Disabled(_) => disabled,
        }
    }

    /// Packs the state into a single signed word
    ///
    /// Disabled states use one's complement negation, so a disabled zero
    /// duration packs to `-1` and a cancelled unbounded timeout to the
    /// minimum signed value.
    pub fn to_raw(self) -> D {
        match self {
            Self::Armed(duration) => duration,
            Self::Forever => D::FOREVER,
            Self::Disabled(duration) => duration.invert(),
        }
    }

    /// Unpacks a word produced by [`TimeoutState::to_raw`]
    pub fn from_raw(raw: D) -> Self {
        if raw.is_negative() {
            Self::Disabled(raw.invert())
        } else {
            Self::armed(raw)
        }
    }
}
