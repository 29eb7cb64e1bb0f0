// main.rs - CLI entry point

use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use barcode_qc::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;

    println!("🚀 barcode-qc v{}", env!("CARGO_PKG_VERSION"));
    match validation.executor.threads {
        Some(n) => println!("🧵 Threads: {}", n),
        None => println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads()),
    }
    println!(
        "⚡ Strategy: {} (batch size {})",
        validation.executor.strategy, validation.executor.batch_size
    );

    let total_start = Instant::now();

    // Load and validate the library before any pair is evaluated
    let library = BarcodeLibrary::from_file(&validation.input, &validation.loader)
        .map_err(|e| format!("loading barcodes: {}", e))?;
    let store = library
        .to_store(validation.alphabet.as_ref())
        .map_err(|e| format!("validating barcodes: {}", e))?;
    println!(
        "🧬 Barcodes: {} (length {}), {} pairs",
        store.len(),
        store.width(),
        pair_count(store.len())
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    if args.benchmark {
        return run_benchmark(&store, &validation);
    }

    // Read-frequency histogram
    if let Some(path) = &validation.frequency_output {
        let frequency = library.frequency_histogram(&store);
        println!(
            "📈 Frequency histogram: {} distinct values over {} barcodes",
            frequency.len(),
            frequency.total()
        );
        write_frequency_histogram(path, validation.format, &frequency, &command_line)
            .map_err(|e| format!("writing frequency histogram: {}", e))?;
    }

    // Pairwise Hamming histogram
    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        progress_bar(pair_count(store.len()))
    };
    let executor = ParallelExecutor::new(validation.executor.clone()).with_progress(progress);
    let histogram = executor.run(&store).map_err(|e| e.to_string())?;

    if args.verify {
        println!("🔍 Verifying against sequential baseline...");
        let baseline = compute_histogram(&store, StrategyKind::Sequential).map_err(|e| e.to_string())?;
        if baseline != histogram {
            return Err(format!(
                "{} strategy disagrees with sequential baseline:\n  {:?}\n  {:?}",
                validation.executor.strategy,
                histogram.counts(),
                baseline.counts()
            ));
        }
        println!("✅ Histogram matches sequential baseline");
    }

    write_distance_histogram(&validation.distance_output, validation.format, &histogram, &command_line)
        .map_err(|e| format!("writing Hamming histogram: {}", e))?;

    // Print summary
    let total_elapsed = total_start.elapsed();
    println!("\n🎉 === BARCODE-QC COMPLETED SUCCESSFULLY ===");
    println!("⏱️  Total execution time: {:.2}s", total_elapsed.as_secs_f64());
    for (distance, count) in histogram.rows().filter(|&(_, count)| count > 0) {
        println!("  • distance {:>3}: {}", distance, count);
    }
    println!("🔧 Command: {}", command_line);

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Time every strategy on prefixes of the store and check they agree
fn run_benchmark(store: &SequenceStore, validation: &ValidationResult) -> Result<(), String> {
    println!("\n🏁 === BENCHMARK MODE ===");
    println!(
        "📊 Testing {} strategies with {} threads",
        StrategyKind::ALL.len(),
        validation.executor.threads.unwrap_or_else(rayon::current_num_threads)
    );

    let mut sizes: Vec<usize> = validation
        .benchmark_sizes
        .iter()
        .map(|&size| size.min(store.len()))
        .collect();
    sizes.dedup();

    for size in sizes {
        let prefix = store.prefix(size);
        println!("\n🧬 Barcodes: {} ({} pairs)", size, pair_count(size));

        let mut baseline: Option<DistanceHistogram> = None;
        for kind in StrategyKind::ALL {
            let config = ExecutorConfig {
                strategy: kind,
                ..validation.executor.clone()
            };
            let start = Instant::now();
            let histogram = ParallelExecutor::new(config)
                .run(&prefix)
                .map_err(|e| format!("{} strategy failed: {}", kind, e))?;
            let elapsed = start.elapsed().as_secs_f64();

            let status = match &baseline {
                None => "baseline",
                Some(expected) if expected == &histogram => "match",
                Some(_) => {
                    return Err(format!("{} strategy disagrees with sequential baseline at n={}", kind, size));
                }
            };
            println!(
                "   ⚡ {:<15} {:>10.4}s {:>14.0} pairs/sec  [{}]",
                kind.as_str(),
                elapsed,
                pair_count(size) as f64 / elapsed.max(f64::EPSILON),
                status
            );
            if baseline.is_none() {
                baseline = Some(histogram);
            }
        }
    }

    println!("\n✅ Benchmark completed: all strategies agree");
    Ok(())
}
