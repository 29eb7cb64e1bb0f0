// mod.rs - Histogram writers

use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::{DistanceHistogram, FrequencyHistogram};
use crate::error::Result;

/// Column headers of the Hamming distance table.
pub const DISTANCE_COLUMNS: [&str; 2] = ["distance", "frequency"];
/// Column headers of the read-frequency table.
pub const FREQUENCY_COLUMNS: [&str; 2] = ["reads", "frequency"];

/// Output file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain two-column table with a header row
    #[default]
    Csv,
    /// Tab-separated table preceded by `#` metadata lines
    Tsv,
    /// JSON report with metadata and rows
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: csv, tsv, json", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        })
    }
}

/// JSON document written for `OutputFormat::Json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramReport {
    pub version: String,
    pub generated: String,
    pub command: String,
    pub columns: [String; 2],
    pub rows: Vec<[u64; 2]>,
    pub total: u64,
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Write `(value, count)` rows in the requested format.
pub fn write_rows<W: Write>(
    writer: W,
    format: OutputFormat,
    columns: [&str; 2],
    rows: &[(u64, u64)],
    command_line: &str,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_delimited(writer, b',', columns, rows),
        OutputFormat::Tsv => {
            let mut writer = writer;
            writeln!(writer, "# Command: {}", command_line)?;
            writeln!(writer, "# Generated: {}", timestamp())?;
            writeln!(writer, "# barcode-qc v{}", env!("CARGO_PKG_VERSION"))?;
            write_delimited(writer, b'\t', columns, rows)
        }
        OutputFormat::Json => {
            let report = HistogramReport {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated: timestamp(),
                command: command_line.to_string(),
                columns: [columns[0].to_string(), columns[1].to_string()],
                rows: rows.iter().map(|&(value, count)| [value, count]).collect(),
                total: rows.iter().map(|&(_, count)| count).sum(),
            };
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, &report).map_err(std::io::Error::from)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_delimited<W: Write>(writer: W, delimiter: u8, columns: [&str; 2], rows: &[(u64, u64)]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    writer.write_record(columns)?;
    for (value, count) in rows {
        writer.write_record([value.to_string(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table(
    file_path: &Path,
    format: OutputFormat,
    columns: [&str; 2],
    rows: &[(u64, u64)],
    command_line: &str,
) -> Result<()> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, format, columns, rows, command_line)?;
    writer.flush()?;
    Ok(())
}

/// Write the Hamming distance histogram, one row per distance `0..=L`.
pub fn write_distance_histogram(
    file_path: &Path,
    format: OutputFormat,
    histogram: &DistanceHistogram,
    command_line: &str,
) -> Result<()> {
    let rows: Vec<(u64, u64)> = histogram.rows().map(|(d, c)| (d as u64, c)).collect();
    write_table(file_path, format, DISTANCE_COLUMNS, &rows, command_line)?;
    println!("✅ Hamming histogram written to: {}", file_path.display());
    Ok(())
}

/// Write the read-frequency histogram over observed values.
pub fn write_frequency_histogram(
    file_path: &Path,
    format: OutputFormat,
    histogram: &FrequencyHistogram,
    command_line: &str,
) -> Result<()> {
    let rows: Vec<(u64, u64)> = histogram.rows().collect();
    write_table(file_path, format, FREQUENCY_COLUMNS, &rows, command_line)?;
    println!("✅ Frequency histogram written to: {}", file_path.display());
    Ok(())
}
