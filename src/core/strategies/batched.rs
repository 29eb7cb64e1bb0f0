// batched.rs - Worker pool over fixed-size pair batches

use rayon::prelude::*;
use super::traits::{DistanceStrategy, ExecutionContext};
use crate::core::histogram::DistanceHistogram;
use crate::error::Result;

/// Default number of pairs handed to a worker at a time.
pub const DEFAULT_BATCH_SIZE: usize = 2048;

/// Splits the pair stream into rank ranges of `batch_size` pairs and spreads
/// them over the pool. Each worker fills a private accumulator; the partials
/// are collected at the join and merged by the caller, in whatever order the
/// workers produced them.
#[derive(Debug, Clone, Default)]
pub struct BatchedStrategy;

impl DistanceStrategy for BatchedStrategy {
    fn compute(&self, ctx: &ExecutionContext<'_>) -> Result<DistanceHistogram> {
        let batches: Vec<_> = ctx.pairs().batches(ctx.batch_size()).collect();

        let partials: Vec<DistanceHistogram> = batches
            .into_par_iter()
            .try_fold(
                || ctx.empty_histogram(),
                |mut partial, ranks| -> Result<DistanceHistogram> {
                    ctx.accumulate(ranks, &mut partial)?;
                    Ok(partial)
                },
            )
            .collect::<Result<Vec<_>>>()?;

        let mut histogram = ctx.empty_histogram();
        for partial in &partials {
            histogram.merge(partial);
        }
        Ok(histogram)
    }

    fn name(&self) -> &'static str {
        "batched"
    }

    fn description(&self) -> &'static str {
        "Fixed-size pair batches over a worker pool, private accumulators merged at the join"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategies::SequentialStrategy;
    use crate::data::SequenceStore;
    use indicatif::ProgressBar;

    #[test]
    fn test_batch_size_does_not_change_result() {
        let barcodes: Vec<String> = (0..40u32)
            .map(|i| format!("{:08b}", i.wrapping_mul(37) % 256))
            .collect();
        let store = SequenceStore::new(&barcodes).unwrap();
        let progress = ProgressBar::hidden();
        let baseline = SequentialStrategy
            .compute(&ExecutionContext::new(&store, DEFAULT_BATCH_SIZE, &progress))
            .unwrap();

        for batch_size in [1, 3, 17, 100, 780, 10_000] {
            let ctx = ExecutionContext::new(&store, batch_size, &progress);
            let histogram = BatchedStrategy.compute(&ctx).unwrap();
            assert_eq!(histogram, baseline, "batch size {}", batch_size);
        }
    }

    #[test]
    fn test_empty_store() {
        let store = SequenceStore::default();
        let progress = ProgressBar::hidden();
        let ctx = ExecutionContext::new(&store, 8, &progress);
        let histogram = BatchedStrategy.compute(&ctx).unwrap();
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.slots(), 1);
    }
}
