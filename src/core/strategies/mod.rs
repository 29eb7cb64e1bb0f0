// mod.rs - Pair-evaluation strategies

pub mod batched;
pub mod map_reduce;
pub mod registry;
pub mod sequential;
pub mod shared_counter;
pub mod traits;

// Re-export main types for convenience
pub use batched::{BatchedStrategy, DEFAULT_BATCH_SIZE};
pub use map_reduce::MapReduceStrategy;
pub use registry::StrategyKind;
pub use sequential::SequentialStrategy;
pub use shared_counter::SharedCounterStrategy;
pub use traits::{DistanceStrategy, ExecutionContext};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SequenceStore;
    use indicatif::ProgressBar;

    #[test]
    fn test_all_strategies_agree() {
        let barcodes = [
            "ACGTAC", "ACGTTT", "GGGGGG", "ACGTAC", "TTTTTT", "ACCTAC", "CAGTAC", "GTGTGT",
        ];
        let store = SequenceStore::new(barcodes).unwrap();
        let progress = ProgressBar::hidden();
        let ctx = ExecutionContext::new(&store, 5, &progress);

        let baseline = SequentialStrategy.compute(&ctx).unwrap();
        assert_eq!(baseline.total(), 28);
        for kind in StrategyKind::ALL {
            let histogram = kind.build().compute(&ctx).unwrap();
            assert_eq!(histogram, baseline, "strategy {}", kind);
        }
    }
}
