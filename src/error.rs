//! Crate-wide error type.
//!
//! Only `InvalidData` is fatal to a session (it stops `start()` from
//! succeeding). Every other error aborts the triggering call and leaves
//! the session exactly as it was.

use thiserror::Error;

use crate::rules::PhaseKind;

/// Errors produced by the trivia engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed question data (bad answer count, out-of-range correct
    /// index, empty deck, unparsable asset).
    #[error("invalid question data: {0}")]
    InvalidData(String),

    /// An operation was invoked in a phase that forbids it.
    #[error("`{operation}` is not allowed while the session is {phase}")]
    State {
        operation: &'static str,
        phase: PhaseKind,
    },

    /// Malformed scoring, movement or configuration input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Journey fraction requested over a zero-length segment.
    #[error("division by zero: segment has zero length")]
    DivisionByZero,
}

impl Error {
    pub(crate) fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for errors that leave the session untouched and usable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidData(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
