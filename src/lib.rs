// lib.rs - barcode-qc library root

//! # barcode-qc - Quality metrics for sequenced barcode libraries
//!
//! Two histograms describe a barcode library: how often each read count
//! occurs, and how far apart the barcodes are from each other. The second
//! one needs every pair of barcodes compared, so the crate provides several
//! interchangeable ways of spreading that `O(n²)` work over threads, all of
//! which produce the same histogram.
//!
//! ## Features
//!
//! - **Four strategies**: sequential baseline, batched worker pool, atomic
//!   shared counter, and map-reduce over one-hot vectors
//! - **Fail fast**: unequal barcode lengths are rejected before any work starts
//! - **No silent loss**: worker panics and under-counted results fail the run
//! - **Multiple formats**: CSV/TSV/FASTA input, CSV/TSV/JSON output
//!
//! ## Basic Usage
//!
//! ```rust
//! use barcode_qc::prelude::*;
//!
//! let store = SequenceStore::new(["AAAA", "AACA", "TTTT"])?;
//! let executor = ParallelExecutor::new(ExecutorConfig::new(StrategyKind::Batched));
//! let histogram = executor.run(&store)?;
//!
//! assert_eq!(histogram.counts(), &[0, 1, 0, 0, 2]);
//! # Ok::<(), barcode_qc::HistogramError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{compute_histogram, hamming, pair_count, PairEnumerator};
    pub use crate::core::{DistanceHistogram, FrequencyHistogram};
    pub use crate::core::{DistanceStrategy, ExecutionContext, ExecutorConfig, ParallelExecutor, StrategyKind};
    pub use crate::data::{BarcodeLibrary, LoaderOptions, SequenceStore};
    pub use crate::error::HistogramError;
    pub use crate::output::{write_distance_histogram, write_frequency_histogram, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use core::{DistanceHistogram, ExecutorConfig, FrequencyHistogram, ParallelExecutor, StrategyKind};
pub use data::{BarcodeLibrary, SequenceStore};
pub use error::HistogramError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "barcode-qc v{} - Barcode library quality metrics",
        VERSION
    )
}
