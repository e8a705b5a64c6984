//! Frequency table for one categorical column.

use indexmap::IndexMap;

/// Insertion-ordered frequency table.
///
/// Order matters: top-k ties are broken by first-seen order, so the result
/// is stable with respect to the input stream.
#[derive(Clone, Debug, Default)]
pub struct CategoricalAccumulator {
    counts: IndexMap<String, u64>,
}

impl CategoricalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the value's count, appending unseen values at the end.
    pub fn add(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count += 1;
        } else {
            self.counts.insert(value.to_owned(), 1);
        }
    }

    /// Number of distinct values seen.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Total number of cells routed to this accumulator.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `k` most frequent values, ties broken by first-seen order.
    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(v, &c)| (v.clone(), c))
            .collect();
        // Stable sort keeps insertion order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }

    /// Combines two frequency tables built from disjoint inputs.
    ///
    /// Merged insertion order is the left operand's keys first, then the
    /// right operand's unseen keys in their original order.
    pub fn merge(&mut self, other: &Self) {
        for (value, &count) in &other.counts {
            *self.counts.entry(value.clone()).or_insert(0) += count;
        }
    }
}
