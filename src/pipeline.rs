//! Fan-out/fan-in parsing of the input stream.
//!
//! ```text
//!              ┌─> worker ─┐
//! reader ─(lines)─> worker ─(records)─> aggregator ─> Vec<Record>
//!              └─> worker ─┘
//! ```
//!
//! Both channels are rendezvous channels, so the reader blocks until a worker
//! is free and the workers block until the aggregator takes their record.
//! When the reader is done it drops the line sender; every worker then drains
//! what is left and exits, dropping its record sender. Once the last record
//! sender is gone the aggregator returns.

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::line::{self, Record};
use crate::line_reader::LineReader;
use crossbeam_channel::{Receiver, Sender};
use std::io::BufRead;
use std::panic;
use std::thread;

/// Parses every measurement line of `reader` on `config.workers` threads.
///
/// Records come back in no particular order. Lines without a separator are
/// skipped silently, lines with an unparsable duration are logged and
/// skipped. A read error aborts the run and no records are returned.
pub fn collect<R: BufRead>(reader: R, config: &Config) -> Result<Vec<Record>> {
    let workers = config.workers.get();
    log::debug!("parsing with {workers} workers");

    let (line_tx, line_rx) = crossbeam_channel::bounded::<String>(0);
    let (record_tx, record_rx) = crossbeam_channel::bounded::<Record>(0);

    thread::scope(|s| {
        let aggregator = s.spawn(move || Aggregator::drain(record_rx));

        let handles: Vec<_> = (0..workers)
            .map(|id| {
                let lines = line_rx.clone();
                let records = record_tx.clone();
                s.spawn(move || parse_worker(id, &lines, &records))
            })
            .collect();
        // Only the workers may keep these alive, otherwise the channels never
        // disconnect.
        drop(line_rx);
        drop(record_tx);

        let produced = produce(reader, line_tx);

        for handle in handles {
            handle.join().unwrap_or_else(|e| panic::resume_unwind(e));
        }
        let records = aggregator
            .join()
            .unwrap_or_else(|e| panic::resume_unwind(e));

        produced.map(|()| records)
    })
}

/// Same result as [`collect`], computed on the calling thread.
pub fn collect_sequential<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut reader = LineReader::new(reader);
    let mut buf = Vec::new();
    let mut aggregator = Aggregator::new();

    while reader.read_line(&mut buf).map_err(Error::Read)? {
        if !line::might_be_measurement(&buf) {
            continue;
        }
        if let Some(record) = parse_logged(&String::from_utf8_lossy(&buf)) {
            aggregator.add(record);
        }
    }
    Ok(aggregator.finish())
}

/// Feeds candidate lines to the workers. Dropping `lines` on return is what
/// tells the workers to wind down.
fn produce<R: BufRead>(reader: R, lines: Sender<String>) -> Result<()> {
    let mut reader = LineReader::new(reader);
    let mut buf = Vec::new();
    let mut dispatched = 0usize;

    while reader.read_line(&mut buf).map_err(Error::Read)? {
        // Most build output isn't a measurement; check before allocating.
        if !line::might_be_measurement(&buf) {
            continue;
        }
        let text = String::from_utf8_lossy(&buf).into_owned();
        if lines.send(text).is_err() {
            // All workers are gone, which only happens if they panicked.
            // The panic surfaces when they are joined.
            break;
        }
        dispatched += 1;
    }

    log::debug!(
        "dispatched {dispatched} lines, skipped {} overlong lines",
        reader.skipped()
    );
    Ok(())
}

fn parse_worker(id: usize, lines: &Receiver<String>, records: &Sender<Record>) {
    let mut parsed = 0usize;
    for text in lines {
        if let Some(record) = parse_logged(&text) {
            if records.send(record).is_err() {
                break;
            }
            parsed += 1;
        }
    }
    log::debug!("worker {id} done, {parsed} records");
}

/// [`line::parse_line`], with invalid durations reported as a warning.
fn parse_logged(text: &str) -> Option<Record> {
    match line::parse_line(text) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
