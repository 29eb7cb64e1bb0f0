// sequential.rs - Single-threaded baseline strategy

use super::traits::{DistanceStrategy, ExecutionContext};
use crate::core::histogram::DistanceHistogram;
use crate::error::Result;

/// Walks every pair in order on the calling thread and increments one
/// accumulator. Reference result for the parallel strategies.
#[derive(Debug, Clone, Default)]
pub struct SequentialStrategy;

impl DistanceStrategy for SequentialStrategy {
    fn compute(&self, ctx: &ExecutionContext<'_>) -> Result<DistanceHistogram> {
        let mut histogram = ctx.empty_histogram();
        for ranks in ctx.pairs().batches(ctx.batch_size()) {
            ctx.accumulate(ranks, &mut histogram)?;
        }
        Ok(histogram)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }

    fn description(&self) -> &'static str {
        "Single control flow over all pairs (baseline)"
    }

    fn is_parallel(&self) -> bool {
        false
    }
}
