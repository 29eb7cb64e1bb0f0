// shared_counter.rs - Workers incrementing one shared slot array

use rayon::prelude::*;
use super::traits::{DistanceStrategy, ExecutionContext};
use crate::core::histogram::{AtomicHistogram, DistanceHistogram};
use crate::error::Result;

/// All workers write into a single `L + 1` slot array. Every increment is an
/// atomic add on its slot, so concurrent updates to the same distance are
/// never lost.
#[derive(Debug, Clone, Default)]
pub struct SharedCounterStrategy;

impl DistanceStrategy for SharedCounterStrategy {
    fn compute(&self, ctx: &ExecutionContext<'_>) -> Result<DistanceHistogram> {
        let shared = AtomicHistogram::new(ctx.width());
        let pairs = ctx.pairs();
        let batches: Vec<_> = pairs.batches(ctx.batch_size()).collect();

        batches.into_par_iter().try_for_each(|ranks| -> Result<()> {
            let evaluated = ranks.end - ranks.start;
            for (i, j) in pairs.range(ranks) {
                shared.increment(ctx.distance(i, j)?);
            }
            ctx.progress().inc(evaluated);
            Ok(())
        })?;

        Ok(shared.into_histogram())
    }

    fn name(&self) -> &'static str {
        "shared-counter"
    }

    fn description(&self) -> &'static str {
        "One shared counter array with atomic per-slot increments"
    }
}
