// library.rs - Barcode library as delivered by the loaders

use std::path::Path;
use regex::Regex;
use crate::core::FrequencyHistogram;
use crate::data::SequenceStore;
use crate::error::{HistogramError, Result};

/// Column layout of a delimited barcode table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Zero-based column holding the barcode sequence.
    pub barcode_column: usize,
    /// Zero-based column holding the read count, if the table has one.
    pub reads_column: Option<usize>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            barcode_column: 1,
            reads_column: Some(0),
        }
    }
}

/// Raw barcodes in input order, with per-barcode read counts when known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeLibrary {
    pub barcodes: Vec<String>,
    pub reads: Option<Vec<u64>>,
}

impl BarcodeLibrary {
    /// Load a library, choosing the parser from the file extension.
    pub fn from_file(file_path: &Path, options: &LoaderOptions) -> Result<Self> {
        let extension = file_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("csv")
            .to_lowercase();

        println!("📊 Loading barcode library: {}", file_path.display());

        let library = match extension.as_str() {
            "csv" => Self::from_delimited_file(file_path, b',', options)?,
            "tsv" | "txt" => Self::from_delimited_file(file_path, b'\t', options)?,
            "fasta" | "fa" | "fas" | "fna" => Self::from_fasta_file(file_path)?,
            other => {
                return Err(HistogramError::InvalidConfig(format!(
                    "Unsupported input format: .{}. Use: csv, tsv, fasta",
                    other
                )))
            }
        };

        println!(
            "✅ Library loaded: {} barcodes{}",
            library.len(),
            if library.reads.is_some() { " with read counts" } else { "" }
        );
        Ok(library)
    }

    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    /// Validate the barcodes into a store. Nothing is computed if this fails.
    pub fn to_store(&self, alphabet: Option<&Regex>) -> Result<SequenceStore> {
        match alphabet {
            Some(pattern) => SequenceStore::with_alphabet(&self.barcodes, pattern),
            None => SequenceStore::new(&self.barcodes),
        }
    }

    /// Read-frequency histogram: from the read-count column when present,
    /// otherwise from barcode recurrence within `store`.
    pub fn frequency_histogram(&self, store: &SequenceStore) -> FrequencyHistogram {
        match &self.reads {
            Some(reads) => FrequencyHistogram::from_read_counts(reads.iter().copied()),
            None => FrequencyHistogram::from_recurrence(store),
        }
    }
}
