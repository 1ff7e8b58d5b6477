//! Ordering the aggregated records, longest first.

use crate::error::{Error, Result};
use crate::line::Record;

/// Records sorted by descending duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    records: Vec<Record>,
}

/// Sorts `records` so the longest duration comes first. Ties keep no
/// particular order.
#[must_use]
pub fn rank(mut records: Vec<Record>) -> Ranking {
    records.sort_unstable_by(|a, b| b.duration.cmp(&a.duration));
    Ranking { records }
}

impl Ranking {
    /// Number of ranked records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No record was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at zero-based rank `index`.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// The `limit` longest records, or all of them if there are fewer.
    #[must_use]
    pub fn top(&self, limit: usize) -> &[Record] {
        &self.records[..limit.min(self.records.len())]
    }

    /// All records, longest first.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::Elapsed;

    fn record(label: &str, millis: i64) -> Record {
        Record::new(label, Elapsed::from_millis(millis))
    }

    #[test]
    fn test_rank_longest_first() {
        let ranking = rank(vec![
            record("build", 1200),
            record("test", 500),
            record("lint", 2000),
        ]);
        let labels: Vec<_> = ranking.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["lint", "build", "test"]);
    }

    #[test]
    fn test_rank_is_non_increasing_with_ties_and_negatives() {
        let ranking = rank(vec![
            record("a", 5),
            record("b", -3),
            record("c", 5),
            record("d", 0),
            record("e", 7),
        ]);
        assert_eq!(ranking.len(), 5);
        let durations: Vec<_> = ranking.iter().map(|r| r.duration).collect();
        assert!(durations.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_get_and_out_of_range() {
        let ranking = rank(vec![record("build", 1200), record("lint", 2000)]);
        assert_eq!(ranking.get(1).unwrap().label, "build");
        assert!(matches!(
            ranking.get(99),
            Err(Error::IndexOutOfRange { index: 99, len: 2 })
        ));
    }

    #[test]
    fn test_top() {
        let ranking = rank(vec![record("a", 1), record("b", 2), record("c", 3)]);
        assert_eq!(ranking.top(2).len(), 2);
        assert_eq!(ranking.top(2)[0].label, "c");
        assert_eq!(ranking.top(10).len(), 3);
        assert!(rank(Vec::new()).is_empty());
    }
}
