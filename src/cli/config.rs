// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output_dir: Option<String>,
    pub frequency_output: Option<String>,
    pub distance_output: Option<String>,
    pub format: Option<String>,

    // Input layout
    pub barcode_column: Option<usize>,
    pub reads_column: Option<usize>,
    pub no_reads: Option<bool>,
    pub alphabet: Option<String>,

    // Execution
    pub strategy: Option<String>,
    pub threads: Option<usize>,
    pub batch_size: Option<usize>,

    // Flags
    pub skip_frequency: Option<bool>,
    pub verify: Option<bool>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# barcode-qc.toml - Configuration file for barcode-qc
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Barcode table (.csv, .tsv) or FASTA file
input = "/path/to/barcodes.csv"

# Directory for output files
output_dir = "results"

# Explicit output paths (default: <output_dir>/frequency_histogram_<input name>
# and <output_dir>/hamming_histogram_<input name>)
# frequency_output = "frequency.csv"
# distance_output = "hamming.csv"

# Output format: csv, tsv, json
format = "csv"

# =============================================================================
# INPUT LAYOUT
# =============================================================================

# Zero-based columns of the barcode table (first row is a header)
barcode_column = 1
reads_column = 0

# Table has no read-count column (frequencies from barcode recurrence)
no_reads = false

# Restrict barcodes to these symbols
# alphabet = "ACGT"

# =============================================================================
# EXECUTION
# =============================================================================

# Strategy: sequential, batched, shared-counter, map-reduce
strategy = "batched"

# Number of worker threads (omit for auto-detection)
threads = 8

# Pairs per worker batch
batch_size = 2048

# =============================================================================
# FLAGS
# =============================================================================

# Skip the read-frequency histogram
skip_frequency = false

# Recompute with the sequential baseline and compare
verify = false

# Hide progress bars
quiet = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("/path/to/barcodes.csv"));
        assert_eq!(config.strategy.as_deref(), Some("batched"));
        assert_eq!(config.threads, Some(8));
        assert_eq!(config.batch_size, Some(2048));
        assert_eq!(config.alphabet, None);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            input: Some("lib.csv".to_string()),
            strategy: Some("map-reduce".to_string()),
            verify: Some(true),
            ..Config::new()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("barcode-qc-config-{}.toml", std::process::id()));
        let config = Config {
            output_dir: Some("results".to_string()),
            threads: Some(4),
            alphabet: Some("ACGT".to_string()),
            skip_frequency: Some(true),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::from_file("/nonexistent/barcode-qc.toml").unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_type_is_error() {
        assert!(Config::from_toml("threads = \"many\"").is_err());
    }
}
