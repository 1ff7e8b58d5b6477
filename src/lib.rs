//! Ranks `<label> -> <duration>` lines, e.g. per-command timings printed by a
//! build tool, by duration.
//!
//! The input is parsed by a pool of worker threads (see [`pipeline`]), the
//! records are gathered by a single [`aggregator`], and the result is sorted
//! longest first by [`rank()`]. [`report`] prints the outcome.
//!
//! ```
//! use longest_exec::{Config, Elapsed};
//!
//! let input = "build -> 1.2s\ntest -> 500ms\nnot a measurement line\nlint -> 2s\n";
//! let ranking = longest_exec::run(input.as_bytes(), &Config::default()).unwrap();
//!
//! let first = ranking.get(0).unwrap();
//! assert_eq!(first.label, "lint");
//! assert_eq!(first.duration, Elapsed::from_secs(2));
//! assert_eq!(ranking.len(), 3);
//! ```

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
// I can't do anything about this; fault of the dependencies
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

pub mod aggregator;
pub mod config;
pub mod duration;
pub mod error;
pub mod line;
pub mod line_reader;
pub mod pipeline;
pub mod rank;
pub mod report;

pub use config::Config;
pub use duration::Elapsed;
pub use error::{DurationError, Error, LineError, Result};
pub use line::{parse_line, Record};
pub use rank::{rank, Ranking};

use std::io::BufRead;

/// Parses all measurement lines of `reader` in parallel and ranks them,
/// longest first.
pub fn run<R: BufRead>(reader: R, config: &Config) -> Result<Ranking> {
    let records = pipeline::collect(reader, config)?;
    Ok(rank(records))
}
