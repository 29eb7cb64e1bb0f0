// executor.rs - Runs a strategy over a store as one batch job

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use indicatif::ProgressBar;
use rayon::ThreadPoolBuilder;
use crate::core::histogram::DistanceHistogram;
use crate::core::pairs::pair_count;
use crate::core::strategies::{DistanceStrategy, ExecutionContext, StrategyKind, DEFAULT_BATCH_SIZE};
use crate::data::SequenceStore;
use crate::error::{HistogramError, Result};

/// Executor settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorConfig {
    pub strategy: StrategyKind,
    /// Worker count; `None` lets rayon pick one per logical CPU.
    pub threads: Option<usize>,
    pub batch_size: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            threads: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ExecutorConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

/// Computes the pairwise distance histogram of a store.
///
/// Each call is self-contained: a fresh worker pool is built, the strategy
/// runs to completion, and the caller blocks until every worker has joined.
/// The result is returned only if its total mass equals `n·(n-1)/2`; a panic
/// in any worker fails the whole run with `WorkerFailure`.
pub struct ParallelExecutor {
    config: ExecutorConfig,
    progress: ProgressBar,
    verbose: bool,
}

impl ParallelExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            progress: ProgressBar::hidden(),
            verbose: false,
        }
    }

    /// Report progress on `progress` and print run summaries.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self.verbose = true;
        self
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run the configured strategy.
    pub fn run(&self, store: &SequenceStore) -> Result<DistanceHistogram> {
        let strategy = self.config.strategy.build();
        self.run_strategy(strategy.as_ref(), store)
    }

    /// Run an arbitrary strategy with this executor's pool and batch settings.
    pub fn run_strategy(
        &self,
        strategy: &dyn DistanceStrategy,
        store: &SequenceStore,
    ) -> Result<DistanceHistogram> {
        if self.config.batch_size == 0 {
            return Err(HistogramError::InvalidConfig(
                "batch size must be greater than 0".to_string(),
            ));
        }

        let expected = pair_count(store.len());
        if self.verbose {
            println!(
                "🔄 Computing Hamming histogram with {} strategy ({} barcodes, {} pairs)...",
                strategy.name(),
                store.len(),
                expected
            );
        }

        let start = Instant::now();
        self.progress.reset();
        self.progress.set_length(expected);

        let ctx = ExecutionContext::new(store, self.config.batch_size, &self.progress);
        let outcome = if strategy.is_parallel() {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.config.threads.unwrap_or(0))
                .build()
                .map_err(|e| HistogramError::ThreadPool(e.to_string()))?;
            panic::catch_unwind(AssertUnwindSafe(|| pool.install(|| strategy.compute(&ctx))))
        } else {
            panic::catch_unwind(AssertUnwindSafe(|| strategy.compute(&ctx)))
        };

        let histogram = match outcome {
            Ok(result) => result?,
            Err(payload) => {
                self.progress.abandon();
                return Err(HistogramError::WorkerFailure {
                    message: panic_message(payload.as_ref()),
                });
            }
        };

        let found = histogram.total();
        if found != expected {
            self.progress.abandon();
            return Err(HistogramError::IncompleteHistogram { expected, found });
        }

        self.progress.finish_with_message("✅ Hamming histogram completed!");
        if self.verbose {
            let elapsed = start.elapsed();
            println!(
                "✅ {} pairs evaluated in {:.2}s ({:.0} pairs/sec)",
                expected,
                elapsed.as_secs_f64(),
                expected as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
            );
        }
        Ok(histogram)
    }
}

/// Convenience wrapper: run `strategy` with default pool and batch settings.
pub fn compute_histogram(store: &SequenceStore, strategy: StrategyKind) -> Result<DistanceHistogram> {
    ParallelExecutor::new(ExecutorConfig::new(strategy)).run(store)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
