//! The single consumer side of the pipeline.

use crate::line::Record;
use crossbeam_channel::Receiver;

/// Collects the records produced by the parse workers.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Aggregator {
    records: Vec<Record>,
}

impl Aggregator {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Receives until every sender is gone and the channel is drained.
    ///
    /// Closure alone doesn't end the loop: records still queued in the channel
    /// are delivered before `recv` reports disconnection.
    #[must_use]
    pub fn drain(records: Receiver<Record>) -> Vec<Record> {
        let mut aggregator = Self::new();
        for record in records {
            aggregator.add(record);
        }
        let records = aggregator.finish();
        log::debug!("aggregated {} records", records.len());
        records
    }

    /// Seals the collection.
    #[must_use]
    pub fn finish(self) -> Vec<Record> {
        self.records
    }
}
