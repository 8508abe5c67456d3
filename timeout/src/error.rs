//! Timeout error types

use thiserror::Error;

/// Errors reported by the checked timeout constructors
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimeoutError {
    /// A duration below zero was requested
    #[error("Timeout duration must not be negative: {0}")]
    NegativeDuration(i64),
}
