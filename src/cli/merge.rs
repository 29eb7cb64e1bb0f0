// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        self.input = self.input.or(config.input);
        self.output_dir = self.output_dir.or(config.output_dir);
        self.frequency_output = self.frequency_output.or(config.frequency_output);
        self.distance_output = self.distance_output.or(config.distance_output);
        self.format = self.format.or(config.format);

        // Input layout
        self.barcode_column = self.barcode_column.or(config.barcode_column);
        self.reads_column = self.reads_column.or(config.reads_column);
        self.alphabet = self.alphabet.or(config.alphabet);

        // Execution
        self.strategy = self.strategy.or(config.strategy);
        self.threads = self.threads.or(config.threads);
        self.batch_size = self.batch_size.or(config.batch_size);

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.no_reads && config.no_reads.unwrap_or(false) {
            self.no_reads = true;
        }
        if !self.skip_frequency && config.skip_frequency.unwrap_or(false) {
            self.skip_frequency = true;
        }
        if !self.verify && config.verify.unwrap_or(false) {
            self.verify = true;
        }
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["barcode-qc"], args).unwrap()
    }

    #[test]
    fn test_config_fills_defaults() {
        let config = Config {
            input: Some("lib.csv".to_string()),
            strategy: Some("map-reduce".to_string()),
            batch_size: Some(512),
            verify: Some(true),
            ..Config::new()
        };
        let args = parse(&[]).merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("lib.csv"));
        assert_eq!(args.strategy.as_deref(), Some("map-reduce"));
        assert_eq!(args.batch_size, Some(512));
        assert!(args.verify);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let config = Config {
            input: Some("from-config.csv".to_string()),
            strategy: Some("map-reduce".to_string()),
            threads: Some(16),
            ..Config::new()
        };
        let args = parse(&["--input", "cli.csv", "--strategy", "sequential", "--threads", "2"])
            .merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("cli.csv"));
        assert_eq!(args.strategy.as_deref(), Some("sequential"));
        assert_eq!(args.threads, Some(2));
    }

    #[test]
    fn test_explicit_default_values_survive_config() {
        let config = Config {
            strategy: Some("map-reduce".to_string()),
            batch_size: Some(64),
            format: Some("json".to_string()),
            output_dir: Some("results".to_string()),
            barcode_column: Some(3),
            reads_column: Some(2),
            ..Config::new()
        };
        let args = parse(&[
            "--strategy", "batched", "--batch-size", "2048", "--format", "csv",
            "--output-dir", ".", "--barcode-column", "1", "--reads-column", "0",
        ])
        .merge_with_config(config);
        assert_eq!(args.strategy.as_deref(), Some("batched"));
        assert_eq!(args.batch_size, Some(2048));
        assert_eq!(args.format.as_deref(), Some("csv"));
        assert_eq!(args.output_dir.as_deref(), Some("."));
        assert_eq!(args.barcode_column, Some(1));
        assert_eq!(args.reads_column, Some(0));
    }
}
