// error.rs - Error types for histogram computation

use thiserror::Error;

/// Errors that can occur while loading barcodes or computing histograms.
#[derive(Error, Debug)]
pub enum HistogramError {
    /// A sequence does not share the store's common length.
    #[error("Length mismatch at index {index}: expected {expected} symbols, found {found}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A sequence contains a symbol outside the allowed alphabet.
    #[error("Invalid symbol '{symbol}' in sequence at index {index}")]
    InvalidSymbol { index: usize, symbol: char },

    /// A parallel worker terminated abnormally; the run produced no histogram.
    #[error("Worker failure: {message}")]
    WorkerFailure { message: String },

    /// The merged histogram does not account for every pair.
    #[error("Incomplete histogram: expected total mass {expected}, found {found}")]
    IncompleteHistogram { expected: u64, found: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, HistogramError>;
