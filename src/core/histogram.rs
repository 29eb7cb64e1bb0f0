// histogram.rs - Distance histogram accumulators

use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::distance::Distance;

/// Counter over distance slots `0..=L`.
///
/// Merging is slot-wise addition, so accumulators form a commutative monoid:
/// any grouping or ordering of increments and merges yields the same slots.
/// Merging two histograms of different widths widens the result, which makes
/// the zero-slot `Default` value the identity element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceHistogram {
    counts: Vec<u64>,
}

impl DistanceHistogram {
    /// Empty accumulator for sequences of length `width` (`width + 1` slots).
    pub fn new(width: usize) -> Self {
        Self {
            counts: vec![0; width + 1],
        }
    }

    /// Accumulator holding a single observation at `distance`.
    pub fn one_hot(width: usize, distance: Distance) -> Self {
        let mut histogram = Self::new(width);
        histogram.increment(distance);
        histogram
    }

    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn increment(&mut self, distance: Distance) {
        self.counts[distance] += 1;
    }

    /// Add every slot of `other` into `self`.
    pub fn merge(&mut self, other: &DistanceHistogram) {
        if other.counts.len() > self.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (slot, count) in self.counts.iter_mut().zip(&other.counts) {
            *slot += count;
        }
    }

    /// Owned variant of [`merge`](Self::merge), convenient for reductions.
    pub fn merged(mut self, other: DistanceHistogram) -> DistanceHistogram {
        if other.counts.len() > self.counts.len() {
            let mut other = other;
            other.merge(&self);
            return other;
        }
        self.merge(&other);
        self
    }

    pub fn get(&self, distance: Distance) -> u64 {
        self.counts.get(distance).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of slots (`L + 1`).
    pub fn slots(&self) -> usize {
        self.counts.len()
    }

    /// Total mass, i.e. the number of pairs accumulated.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(distance, count)` rows for every slot, zero counts included.
    pub fn rows(&self) -> impl Iterator<Item = (Distance, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

/// Shared slot array incremented concurrently with atomic adds.
#[derive(Debug)]
pub struct AtomicHistogram {
    counts: Vec<AtomicU64>,
}

impl AtomicHistogram {
    pub fn new(width: usize) -> Self {
        Self {
            counts: (0..=width).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    #[inline]
    pub fn increment(&self, distance: Distance) {
        self.counts[distance].fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the slots once every worker has joined.
    pub fn into_histogram(self) -> DistanceHistogram {
        DistanceHistogram::from_counts(self.counts.into_iter().map(AtomicU64::into_inner).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_total() {
        let mut histogram = DistanceHistogram::new(4);
        histogram.increment(1);
        histogram.increment(4);
        histogram.increment(3);
        assert_eq!(histogram.counts(), &[0, 1, 0, 1, 1]);
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.slots(), 5);
        assert_eq!(histogram.get(7), 0);
    }

    #[test]
    fn test_merge_is_commutative_and_associative() {
        let a = DistanceHistogram::from_counts(vec![1, 0, 2]);
        let b = DistanceHistogram::from_counts(vec![0, 5, 1]);
        let c = DistanceHistogram::from_counts(vec![3, 3, 3]);

        let ab_c = a.clone().merged(b.clone()).merged(c.clone());
        let a_bc = a.clone().merged(b.clone().merged(c.clone()));
        let cba = c.merged(b).merged(a);

        assert_eq!(ab_c, a_bc);
        assert_eq!(ab_c, cba);
        assert_eq!(ab_c.counts(), &[4, 8, 6]);
    }

    #[test]
    fn test_empty_is_identity() {
        let a = DistanceHistogram::from_counts(vec![2, 0, 1]);
        assert_eq!(a.clone().merged(DistanceHistogram::default()), a);
        assert_eq!(DistanceHistogram::default().merged(a.clone()), a);
        assert_eq!(a.clone().merged(DistanceHistogram::new(2)), a);
    }

    #[test]
    fn test_one_hot() {
        let h = DistanceHistogram::one_hot(3, 2);
        assert_eq!(h.counts(), &[0, 0, 1, 0]);
    }

    #[test]
    fn test_rows_include_zero_slots() {
        let h = DistanceHistogram::from_counts(vec![0, 1, 0]);
        let rows: Vec<_> = h.rows().collect();
        assert_eq!(rows, vec![(0, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_atomic_histogram_concurrent_increments() {
        let shared = AtomicHistogram::new(2);
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for i in 0..10_000 {
                        shared.increment(i % 3);
                    }
                });
            }
        });
        let histogram = shared.into_histogram();
        assert_eq!(histogram.total(), 80_000);
        assert_eq!(histogram.get(0), 8 * 3334);
    }
}
