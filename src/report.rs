//! Printing a [`Ranking`].

use crate::config::Config;
use crate::error::Result;
use crate::rank::Ranking;
use std::borrow::Cow;
use std::io::{self, Write};

/// First line of the table report.
pub const HEADER: &str = "Longest execution sorted by time:";

const ELLIPSIS: &str = "...";

/// Writes the header and one aligned `<duration> | <label>` row per entry.
///
/// Labels are shortened with [`base_command`] and [`ellipsize`]; at most
/// [`Config::max_lines`] rows are written.
pub fn write_table<W: Write>(out: &mut W, ranking: &Ranking, config: &Config) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;

    let rows = ranking.top(config.rows(ranking.len()));
    let durations: Vec<String> = rows.iter().map(|r| r.duration.to_string()).collect();
    let width = durations
        .iter()
        .map(|d| d.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    let max_columns = config.label_width();
    for (record, duration) in rows.iter().zip(&durations) {
        let label = base_command(&record.label);
        writeln!(out, "{duration:<width$} | {}", ellipsize(&label, max_columns))?;
    }
    Ok(())
}

/// Writes the full label and the duration of the entry at rank `index`.
pub fn write_entry<W: Write>(out: &mut W, ranking: &Ranking, index: usize) -> Result<()> {
    let record = ranking.get(index)?;
    writeln!(out, "{}", record.label)?;
    writeln!(out, "{}", record.duration)?;
    Ok(())
}

/// Strips the directories off the first word, e.g.
/// `/usr/bin/cc -c main.c` becomes `cc -c main.c`.
#[must_use]
pub fn base_command(label: &str) -> Cow<'_, str> {
    match label.split_once(' ') {
        Some((program, args)) => {
            let base = basename(program);
            if base.len() == program.len() {
                Cow::Borrowed(label)
            } else {
                Cow::Owned(format!("{base} {args}"))
            }
        }
        None => Cow::Borrowed(basename(label)),
    }
}

fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None if trimmed.is_empty() => path,
        None => trimmed,
    }
}

/// Cuts `s` to `max` characters, the last three being `...`.
#[must_use]
pub fn ellipsize(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut shortened: String = s.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    Cow::Owned(shortened)
}
