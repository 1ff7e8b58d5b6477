//! Error types of the crate.

use std::io;
use thiserror::Error;

/// Why a duration token could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The token was empty (or only a sign).
    #[error("empty duration")]
    Empty,
    /// A magnitude was expected but something else was found.
    #[error("invalid duration {0:?}")]
    Invalid(String),
    /// A number was not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    /// A number was followed by a unit that isn't known.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The offending unit suffix.
        unit: String,
        /// The whole token.
        input: String,
    },
    /// The total does not fit into signed 64-bit nanoseconds.
    #[error("duration {0:?} out of range")]
    Overflow(String),
}

/// A line had a `" -> "` separator, but its trailing token was no duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration {token:?}: {source}")]
pub struct LineError {
    /// The text after the final separator.
    pub token: String,
    /// Why parsing failed.
    #[source]
    pub source: DurationError,
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input stream failed for a reason other than end of input.
    #[error("failed to read input")]
    Read(#[source] io::Error),
    /// A rank index does not address an entry of the ranking.
    #[error("line {index} out of bounds, must be less than {len}")]
    IndexOutOfRange {
        /// The requested zero-based rank.
        index: usize,
        /// Number of ranked entries.
        len: usize,
    },
    /// Writing the report failed.
    #[error("failed to write report")]
    Write(#[from] io::Error),
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
