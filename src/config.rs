//! Settings fixed before the pipeline starts.

use std::num::NonZeroUsize;

/// Default for [`Config::max_lines`].
pub const DEFAULT_MAX_LINES: usize = 15;
/// Default for [`Config::max_columns`].
pub const DEFAULT_MAX_COLUMNS: usize = 200;
/// Label width used when the configured one is too small to hold `...`.
pub const FALLBACK_MAX_COLUMNS: usize = 80;

/// Immutable run configuration.
///
/// Built once by the caller and handed to every stage by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of parse workers.
    pub workers: NonZeroUsize,
    /// Entries printed by the table report; `0` prints all of them.
    pub max_lines: usize,
    /// Width labels are truncated to in the table report.
    pub max_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            max_lines: DEFAULT_MAX_LINES,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}

impl Config {
    /// Overrides the worker count.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    /// Overrides the table length.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Overrides the label width.
    #[must_use]
    pub const fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Label width actually applied; widths below 3 can't fit an ellipsis.
    #[must_use]
    pub const fn label_width(&self) -> usize {
        if self.max_columns < 3 {
            FALLBACK_MAX_COLUMNS
        } else {
            self.max_columns
        }
    }

    /// Number of table rows for a ranking of `len` entries.
    #[must_use]
    pub const fn rows(&self, len: usize) -> usize {
        if self.max_lines == 0 || self.max_lines > len {
            len
        } else {
            self.max_lines
        }
    }
}

/// One worker per logical CPU.
fn default_workers() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_lines, 15);
        assert_eq!(config.max_columns, 200);
        assert!(config.workers.get() >= 1);
    }

    #[test]
    fn test_label_width_fallback() {
        assert_eq!(Config::default().with_max_columns(2).label_width(), 80);
        assert_eq!(Config::default().with_max_columns(3).label_width(), 3);
    }

    #[test]
    fn test_rows() {
        let config = Config::default().with_max_lines(2);
        assert_eq!(config.rows(5), 2);
        assert_eq!(config.rows(1), 1);
        assert_eq!(config.with_max_lines(0).rows(5), 5);
    }
}
