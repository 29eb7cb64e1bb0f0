// traits.rs - Core trait for pair-evaluation strategies

use std::fmt::Debug;
use std::ops::Range;
use indicatif::ProgressBar;
use crate::core::distance::{hamming, Distance};
use crate::core::histogram::DistanceHistogram;
use crate::core::pairs::PairEnumerator;
use crate::data::SequenceStore;
use crate::error::{HistogramError, Result};

/// Everything a worker needs for one run, built once by the executor and
/// shared by reference with every worker.
#[derive(Debug)]
pub struct ExecutionContext<'a> {
    store: &'a SequenceStore,
    pairs: PairEnumerator,
    batch_size: usize,
    progress: &'a ProgressBar,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(store: &'a SequenceStore, batch_size: usize, progress: &'a ProgressBar) -> Self {
        Self {
            store,
            pairs: PairEnumerator::new(store.len()),
            batch_size: batch_size.max(1),
            progress,
        }
    }

    pub fn store(&self) -> &SequenceStore {
        self.store
    }

    pub fn pairs(&self) -> PairEnumerator {
        self.pairs
    }

    /// Sequence length `L`; histograms have `L + 1` slots.
    pub fn width(&self) -> usize {
        self.store.width()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn progress(&self) -> &ProgressBar {
        self.progress
    }

    /// Fresh accumulator sized for this store.
    pub fn empty_histogram(&self) -> DistanceHistogram {
        DistanceHistogram::new(self.width())
    }

    /// Distance between sequences `i` and `j`. A length mismatch names `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> Result<Distance> {
        hamming(self.store.sequence(i), self.store.sequence(j)).map_err(|e| match e {
            HistogramError::LengthMismatch { expected, found, .. } => {
                HistogramError::LengthMismatch { index: j, expected, found }
            }
            other => other,
        })
    }

    /// Evaluate every pair in `ranks` into `histogram`.
    pub fn accumulate(&self, ranks: Range<u64>, histogram: &mut DistanceHistogram) -> Result<()> {
        let evaluated = ranks.end - ranks.start;
        for (i, j) in self.pairs.range(ranks) {
            histogram.increment(self.distance(i, j)?);
        }
        self.progress.inc(evaluated);
        Ok(())
    }
}

/// A way of distributing pair evaluation. Every implementation computes the
/// same histogram for the same store; they differ only in scheduling and in
/// how partial counts are combined.
pub trait DistanceStrategy: Send + Sync + Debug {
    /// Evaluate all pairs of the context's store.
    fn compute(&self, ctx: &ExecutionContext<'_>) -> Result<DistanceHistogram>;

    /// Get a human-readable name for this strategy
    fn name(&self) -> &'static str;

    /// Get a description of this strategy
    fn description(&self) -> &'static str;

    /// Whether the strategy uses the worker pool at all
    fn is_parallel(&self) -> bool {
        true
    }
}
