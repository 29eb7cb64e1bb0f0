// map_reduce.rs - One-hot map with an associative parallel reduction

use rayon::prelude::*;
use super::traits::{DistanceStrategy, ExecutionContext};
use crate::core::histogram::DistanceHistogram;
use crate::error::Result;

/// Maps every pair to a one-hot vector of `L + 1` slots and sums the vectors
/// through rayon's reduction tree. No shared mutable state and no locking;
/// the cost is one small allocation per pair.
#[derive(Debug, Clone, Default)]
pub struct MapReduceStrategy;

impl DistanceStrategy for MapReduceStrategy {
    fn compute(&self, ctx: &ExecutionContext<'_>) -> Result<DistanceHistogram> {
        let n = ctx.store().len();
        let width = ctx.width();

        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                ctx.progress().inc((n - i - 1) as u64);
                (i + 1..n).map(move |j| (i, j))
            })
            .map(|(i, j)| ctx.distance(i, j).map(|d| DistanceHistogram::one_hot(width, d)))
            .try_reduce(|| ctx.empty_histogram(), |a, b| Ok(a.merged(b)))
    }

    fn name(&self) -> &'static str {
        "map-reduce"
    }

    fn description(&self) -> &'static str {
        "Per-pair one-hot vectors summed by an associative parallel reduction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SequenceStore;
    use indicatif::ProgressBar;

    #[test]
    fn test_map_reduce_known_store() {
        let store = SequenceStore::new(["AAAA", "AACA", "TTTT"]).unwrap();
        let progress = ProgressBar::hidden();
        let ctx = ExecutionContext::new(&store, 16, &progress);
        let histogram = MapReduceStrategy.compute(&ctx).unwrap();
        assert_eq!(histogram.counts(), &[0, 1, 0, 0, 2]);
    }

    #[test]
    fn test_single_sequence() {
        let store = SequenceStore::new(["AAAA"]).unwrap();
        let progress = ProgressBar::hidden();
        let ctx = ExecutionContext::new(&store, 16, &progress);
        let histogram = MapReduceStrategy.compute(&ctx).unwrap();
        assert_eq!(histogram.counts(), &[0, 0, 0, 0, 0]);
    }
}
