//! Splitting `<label> -> <duration>` lines into [`Record`]s.

use crate::duration::{self, Elapsed};
use crate::error::LineError;
use memchr::memmem;

/// Separator between label and duration.
pub const SEPARATOR: &str = " -> ";

/// Cheap marker every measurement line contains.
const ARROW: &[u8] = b"->";

/// A labeled timing measurement taken from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Everything before the final separator, untrimmed.
    pub label: String,
    /// The parsed trailing token.
    pub duration: Elapsed,
}

impl Record {
    /// Creates a record.
    #[must_use]
    pub fn new(label: impl Into<String>, duration: Elapsed) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }
}

/// Fast, allocation free pre-check on raw input bytes.
///
/// Never rejects a line [`parse_line`] would accept, but admits lines it will
/// reject later (e.g. `a->b`).
#[must_use]
pub fn might_be_measurement(line: &[u8]) -> bool {
    memmem::find(line, ARROW).is_some()
}

/// Parses one line.
///
/// * `Ok(Some(record))`: a measurement line.
/// * `Ok(None)`: no separator, so not a measurement at all.
/// * `Err(_)`: a separator was found but the trailing token is no duration.
///
/// Only the last separator counts, so labels may contain `" -> "` themselves.
/// Separators are matched left to right without overlapping, which makes
/// `a -> -> 1s` end in the token `-> 1s`.
pub fn parse_line(line: &str) -> Result<Option<Record>, LineError> {
    let Some(at) = memmem::find_iter(line.as_bytes(), SEPARATOR.as_bytes()).last() else {
        return Ok(None);
    };

    let label = &line[..at];
    let token = &line[at + SEPARATOR.len()..];
    let duration = duration::parse(token).map_err(|source| LineError {
        token: token.to_string(),
        source,
    })?;

    Ok(Some(Record::new(label, duration)))
}
