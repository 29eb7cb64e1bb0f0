// validation.rs - Input validation utilities

use std::path::{Path, PathBuf};
use regex::Regex;
use crate::cli::args::Args;
use crate::core::{ExecutorConfig, StrategyKind, DEFAULT_BATCH_SIZE};
use crate::data::LoaderOptions;
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub input: PathBuf,
    pub executor: ExecutorConfig,
    pub format: OutputFormat,
    pub loader: LoaderOptions,
    pub alphabet: Option<Regex>,
    pub frequency_output: Option<PathBuf>,
    pub distance_output: PathBuf,
    pub benchmark_sizes: Vec<usize>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input = args.input.as_ref().ok_or("--input is required")?;
    let input = PathBuf::from(input);

    let strategy = match &args.strategy {
        Some(name) => name.parse::<StrategyKind>()?,
        None => StrategyKind::default(),
    };
    let format = match &args.format {
        Some(name) => name.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let batch_size = args.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
    if batch_size == 0 {
        return Err("--batch-size must be greater than 0".to_string());
    }
    let mut executor = ExecutorConfig::new(strategy).with_batch_size(batch_size);
    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err("--threads must be greater than 0".to_string());
        }
        executor = executor.with_threads(threads);
    }

    if args.skip_frequency && args.frequency_output.is_some() {
        return Err("--frequency-output is not compatible with --skip-frequency".to_string());
    }

    let defaults = LoaderOptions::default();
    let barcode_column = args.barcode_column.unwrap_or(defaults.barcode_column);
    let reads_column = if args.no_reads {
        None
    } else {
        args.reads_column.or(defaults.reads_column)
    };
    if reads_column == Some(barcode_column) {
        return Err(format!(
            "--reads-column and --barcode-column both point to column {}",
            barcode_column
        ));
    }
    let loader = LoaderOptions {
        barcode_column,
        reads_column,
    };

    let alphabet = match &args.alphabet {
        Some(symbols) => Some(compile_alphabet(symbols)?),
        None => None,
    };

    let output_dir = Path::new(args.output_dir.as_deref().unwrap_or("."));
    let input_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Invalid input file name: {}", input.display()))?;

    let frequency_output = if args.skip_frequency {
        None
    } else {
        Some(match &args.frequency_output {
            Some(path) => PathBuf::from(path),
            None => output_dir.join(format!("frequency_histogram_{}", input_name)),
        })
    };
    let distance_output = match &args.distance_output {
        Some(path) => PathBuf::from(path),
        None => output_dir.join(format!("hamming_histogram_{}", input_name)),
    };

    let benchmark_sizes = parse_sizes(&args.benchmark_sizes)?;

    Ok(ValidationResult {
        input,
        executor,
        format,
        loader,
        alphabet,
        frequency_output,
        distance_output,
        benchmark_sizes,
    })
}

/// Build an anchored character-class pattern from a list of symbols.
pub fn compile_alphabet(symbols: &str) -> Result<Regex, String> {
    let symbols = symbols.trim();
    if symbols.is_empty() {
        return Err("--alphabet must contain at least one symbol".to_string());
    }
    let class: String = symbols.chars().map(|c| regex::escape(&c.to_string())).collect();
    Regex::new(&format!("^[{}]*$", class)).map_err(|e| format!("Invalid alphabet: {}", e))
}

fn parse_sizes(list: &str) -> Result<Vec<usize>, String> {
    let mut sizes = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let size = part
            .parse::<usize>()
            .map_err(|_| format!("Invalid benchmark size '{}'", part))?;
        sizes.push(size);
    }
    if sizes.is_empty() {
        return Err("--benchmark-sizes must list at least one size".to_string());
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["barcode-qc"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let result = validate_args(&parse(&["--input", "data/lib.csv"])).unwrap();
        assert_eq!(result.executor.strategy, StrategyKind::Batched);
        assert_eq!(result.executor.batch_size, 2048);
        assert_eq!(result.executor.threads, None);
        assert_eq!(result.format, OutputFormat::Csv);
        assert_eq!(result.loader, LoaderOptions::default());
        assert_eq!(result.distance_output, Path::new("./hamming_histogram_lib.csv"));
        assert_eq!(
            result.frequency_output.as_deref(),
            Some(Path::new("./frequency_histogram_lib.csv"))
        );
        assert_eq!(result.benchmark_sizes, vec![10, 100, 1000, 10000]);
    }

    #[test]
    fn test_input_required() {
        assert!(validate_args(&parse(&[])).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        for bad in [
            &["--input", "a.csv", "--strategy", "gpu"][..],
            &["--input", "a.csv", "--format", "xml"][..],
            &["--input", "a.csv", "--batch-size", "0"][..],
            &["--input", "a.csv", "--threads", "0"][..],
            &["--input", "a.csv", "--reads-column", "1"][..],
            &["--input", "a.csv", "--skip-frequency", "--frequency-output", "f.csv"][..],
            &["--input", "a.csv", "--benchmark-sizes", "10,lots"][..],
        ] {
            assert!(validate_args(&parse(bad)).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_no_reads_and_skip_frequency() {
        let result =
            validate_args(&parse(&["--input", "a.fasta", "--no-reads", "--skip-frequency"])).unwrap();
        assert_eq!(result.loader.reads_column, None);
        assert!(result.frequency_output.is_none());
    }

    #[test]
    fn test_compile_alphabet() {
        let alphabet = compile_alphabet("ACGT").unwrap();
        assert!(alphabet.is_match("GATTACA"));
        assert!(!alphabet.is_match("GATNACA"));
        let dotted = compile_alphabet("ACGT.").unwrap();
        assert!(dotted.is_match("AC.T"));
        assert!(!dotted.is_match("ACxT"));
        assert!(compile_alphabet("  ").is_err());
    }
}
