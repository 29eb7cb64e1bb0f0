// csv.rs - Delimited (CSV/TSV) barcode table loader

use std::fs::File;
use std::io::Read;
use std::path::Path;
use crate::data::library::{BarcodeLibrary, LoaderOptions};
use crate::error::{HistogramError, Result};

impl BarcodeLibrary {
    /// Load a delimited table from disk. The first row is a header.
    pub fn from_delimited_file(file_path: &Path, delimiter: u8, options: &LoaderOptions) -> Result<Self> {
        let file = File::open(file_path)?;
        Self::from_delimited_reader(file, delimiter, options)
    }

    /// Parse a delimited table with a header row; one barcode per data row.
    pub fn from_delimited_reader<R: Read>(reader: R, delimiter: u8, options: &LoaderOptions) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut barcodes = Vec::new();
        let mut reads = options.reads_column.map(|_| Vec::new());

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = record.position().map(|p| p.line() as usize).unwrap_or(row + 2);

            let barcode = record.get(options.barcode_column).ok_or_else(|| HistogramError::Parse {
                line,
                message: format!(
                    "missing barcode column {} ({} fields)",
                    options.barcode_column,
                    record.len()
                ),
            })?;
            barcodes.push(barcode.to_string());

            if let (Some(column), Some(reads)) = (options.reads_column, reads.as_mut()) {
                let field = record.get(column).ok_or_else(|| HistogramError::Parse {
                    line,
                    message: format!("missing reads column {} ({} fields)", column, record.len()),
                })?;
                let value = field.parse::<u64>().map_err(|_| HistogramError::Parse {
                    line,
                    message: format!("failed to parse '{}' as a read count", field),
                })?;
                reads.push(value);
            }
        }

        Ok(Self { barcodes, reads })
    }
}
