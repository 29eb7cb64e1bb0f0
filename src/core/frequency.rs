// frequency.rs - Read-frequency histogram over barcode recurrence

use std::collections::{BTreeMap, HashMap};
use crate::data::SequenceStore;

/// Mapping from an observed value (reads per barcode) to how many barcodes
/// carry that value. Rows iterate in ascending value order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyHistogram {
    counts: BTreeMap<u64, u64>,
}

impl FrequencyHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram of per-barcode read counts taken from the input table.
    pub fn from_read_counts<I: IntoIterator<Item = u64>>(reads: I) -> Self {
        let mut histogram = Self::new();
        for value in reads {
            histogram.record(value);
        }
        histogram
    }

    /// Histogram of how often each distinct barcode recurs in the store, for
    /// inputs that carry no read-count column.
    pub fn from_recurrence(store: &SequenceStore) -> Self {
        let mut occurrences: HashMap<&[u8], u64> = HashMap::with_capacity(store.len());
        for sequence in store.iter() {
            *occurrences.entry(sequence).or_insert(0) += 1;
        }
        Self::from_read_counts(occurrences.into_values())
    }

    pub fn record(&mut self, value: u64) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn get(&self, value: u64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct observed values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of observations recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }
}
