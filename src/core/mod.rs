// mod.rs - Core logic module

pub mod distance;
pub mod executor;
pub mod frequency;
pub mod histogram;
pub mod pairs;
pub mod strategies;

// Re-export main types for convenience
pub use distance::{hamming, hamming_unchecked, Distance};
pub use executor::{compute_histogram, ExecutorConfig, ParallelExecutor};
pub use frequency::FrequencyHistogram;
pub use histogram::{AtomicHistogram, DistanceHistogram};
pub use pairs::{pair_count, PairEnumerator, Pairs};
pub use strategies::{DistanceStrategy, ExecutionContext, StrategyKind, DEFAULT_BATCH_SIZE};
