//! Compound durations such as `1h2m3.5s`, `250ms` or `-1.5µs`.

use crate::error::DurationError;
use std::fmt::{self, Write as _};
use std::str::FromStr;

const MICROSECOND: u64 = 1_000;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Unit suffixes and their length in nanoseconds.
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", MICROSECOND),
    // U+00B5 micro sign
    ("µs", MICROSECOND),
    // U+03BC greek small letter mu
    ("μs", MICROSECOND),
    ("ms", MILLISECOND),
    ("s", SECOND),
    ("m", MINUTE),
    ("h", HOUR),
];

/// A signed time interval with nanosecond resolution.
///
/// Ordering is the numeric ordering of the interval, so the longest of two
/// values compares greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed(i64);

impl Elapsed {
    /// The empty interval.
    pub const ZERO: Self = Self(0);

    /// Creates an interval from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates an interval from milliseconds, saturating at the i64 bounds.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(MILLISECOND as i64))
    }

    /// Creates an interval from seconds, saturating at the i64 bounds.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(SECOND as i64))
    }
}

impl FromStr for Elapsed {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a duration token.
///
/// A token is an optionally signed sequence of `<number><unit>` pairs, e.g.
/// `1.5s`, `250ms` or `1h15m30.918273645s`. Valid units are `ns`, `us` (or
/// `µs`), `ms`, `s`, `m` and `h`. The bare literal `0` needs no unit.
pub fn parse(input: &str) -> Result<Elapsed, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let mut s = input.as_bytes();
    let mut negative = false;
    if let Some(rest) = s.strip_prefix(b"-") {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix(b"+") {
        s = rest;
    }

    if s == b"0" {
        return Ok(Elapsed::ZERO);
    }
    if s.is_empty() {
        return Err(if input.is_empty() {
            DurationError::Empty
        } else {
            invalid()
        });
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !(s[0] == b'.' || s[0].is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole, whole_digits, rest) = leading_int(s).ok_or_else(overflow)?;
        s = rest;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut fraction_digits = 0;
        if let Some(rest) = s.strip_prefix(b".") {
            (fraction, scale, fraction_digits, s) = leading_fraction(rest);
        }
        if whole_digits == 0 && fraction_digits == 0 {
            // "." or ".s"
            return Err(invalid());
        }

        let unit_len = s
            .iter()
            .position(|&c| c == b'.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;

        let unit_nanos = UNITS
            .iter()
            .find(|(suffix, _)| suffix.as_bytes() == unit)
            .map(|&(_, nanos)| nanos)
            .ok_or_else(|| DurationError::UnknownUnit {
                unit: String::from_utf8_lossy(unit).into_owned(),
                input: input.to_string(),
            })?;

        let mut value = whole.checked_mul(unit_nanos).ok_or_else(overflow)?;
        if fraction > 0 {
            // Truncates to whole nanoseconds.
            let extra = (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
            value = value.checked_add(extra).ok_or_else(overflow)?;
        }
        total = total.checked_add(value).ok_or_else(overflow)?;
    }

    if negative {
        if total > i64::MIN.unsigned_abs() {
            return Err(overflow());
        }
        Ok(Elapsed((total as i64).wrapping_neg()))
    } else {
        i64::try_from(total).map(Elapsed).map_err(|_| overflow())
    }
}

/// Consumes leading ASCII digits. Returns `None` if the value overflows.
fn leading_int(s: &[u8]) -> Option<(u64, usize, &[u8])> {
    let digits = s.iter().take_while(|c| c.is_ascii_digit()).count();
    let mut value: u64 = 0;
    for &c in &s[..digits] {
        value = value.checked_mul(10)?.checked_add(u64::from(c - b'0'))?;
    }
    Some((value, digits, &s[digits..]))
}

/// Consumes the digits after a decimal point.
///
/// Digits beyond what fits into the accumulator are consumed but ignored;
/// they are below nanosecond precision for every unit anyway.
fn leading_fraction(s: &[u8]) -> (u64, f64, usize, &[u8]) {
    let digits = s.iter().take_while(|c| c.is_ascii_digit()).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    for &c in &s[..digits] {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(c - b'0')))
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => break,
        }
    }
    (value, scale, digits, &s[digits..])
}

/// Appends `.<fraction>` with `digits` places, dropping trailing zeros.
fn push_fraction(out: &mut String, fraction: u64, digits: usize) {
    let padded = format!("{fraction:0digits$}");
    let trimmed = padded.trim_end_matches('0');
    if !trimmed.is_empty() {
        out.push('.');
        out.push_str(trimmed);
    }
}

impl fmt::Display for Elapsed {
    /// Formats as `72h3m0.5s`, `1.2s`, `500ms`, `1.5µs` or `0s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.pad("0s");
        }

        let mut out = String::with_capacity(24);
        if self.0 < 0 {
            out.push('-');
        }
        let u = self.0.unsigned_abs();

        if u < SECOND {
            let (unit, per_unit, digits) = if u < MICROSECOND {
                ("ns", 1, 0)
            } else if u < MILLISECOND {
                ("µs", MICROSECOND, 3)
            } else {
                ("ms", MILLISECOND, 6)
            };
            write!(out, "{}", u / per_unit)?;
            push_fraction(&mut out, u % per_unit, digits);
            out.push_str(unit);
        } else {
            let secs = u / SECOND;
            let mins = secs / 60;
            let hours = mins / 60;
            if hours > 0 {
                write!(out, "{hours}h")?;
            }
            if mins > 0 {
                write!(out, "{}m", mins % 60)?;
            }
            write!(out, "{}", secs % 60)?;
            push_fraction(&mut out, u % SECOND, 9);
            out.push('s');
        }

        f.pad(&out)
    }
}
