#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
#![allow(clippy::multiple_crate_versions)]
// allow: required because of derive macro.. :(
#![allow(clippy::use_self)]
#![deny(missing_debug_implementations)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use longest_exec::{config, report, Config};
use std::io::{self, BufReader, BufWriter, Write};
use std::num::NonZeroUsize;

const READ_BUFFER_SIZE: usize = 0x10000 /* 64 KiB */;

/// Reads `<label> -> <duration>` lines from stdin and lists the longest ones.
#[derive(Parser, Debug)]
#[command(name = "longest-exec", version)]
struct Cli {
    /// Maximum lines to print (0 prints all)
    #[arg(long, visible_alias = "maxlines", default_value_t = config::DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Maximum columns to trim labels to
    #[arg(long, visible_alias = "maxcolumns", default_value_t = config::DEFAULT_MAX_COLUMNS)]
    max_columns: usize,

    /// Number of parse workers [default: number of CPUs]
    #[arg(short = 'j', long)]
    workers: Option<NonZeroUsize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full label and duration of one entry
    Line {
        /// Zero-based rank, 0 being the longest
        index: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = Config::default()
        .with_max_lines(cli.max_lines)
        .with_max_columns(cli.max_columns);
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }

    let input = BufReader::with_capacity(READ_BUFFER_SIZE, io::stdin().lock());
    let ranking = longest_exec::run(input, &config).context("failed to scan")?;
    if ranking.is_empty() {
        log::warn!("no `<label> -> <duration>` lines found in input");
    }

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.command {
        None => report::write_table(&mut out, &ranking, &config).context("failed to flush")?,
        Some(Command::Line { index }) => report::write_entry(&mut out, &ranking, index)?,
    }
    out.flush().context("failed to flush")?;
    Ok(())
}
