// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// barcode-qc - Read-frequency and pairwise Hamming distance histograms for barcode libraries
pub struct Args {
    /// path to barcode table (.csv, .tsv) or FASTA file
    #[argh(option)]
    pub input: Option<String>,

    /// directory for output files (default: current directory)
    #[argh(option)]
    pub output_dir: Option<String>,

    /// frequency histogram output file (default: frequency_histogram_<input name>)
    #[argh(option)]
    pub frequency_output: Option<String>,

    /// hamming histogram output file (default: hamming_histogram_<input name>)
    #[argh(option)]
    pub distance_output: Option<String>,

    /// pair evaluation strategy: sequential, batched, shared-counter, map-reduce (default: batched)
    #[argh(option)]
    pub strategy: Option<String>,

    /// number of worker threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// pairs per worker batch (default: 2048)
    #[argh(option)]
    pub batch_size: Option<usize>,

    /// output format: csv, tsv, json (default: csv)
    #[argh(option)]
    pub format: Option<String>,

    /// zero-based column holding the barcode (default: 1)
    #[argh(option)]
    pub barcode_column: Option<usize>,

    /// zero-based column holding the read count (default: 0)
    #[argh(option)]
    pub reads_column: Option<usize>,

    /// input table has no read-count column; frequencies come from barcode recurrence
    #[argh(switch)]
    pub no_reads: bool,

    /// restrict barcodes to these symbols, e.g. ACGT
    #[argh(option)]
    pub alphabet: Option<String>,

    /// skip the read-frequency histogram
    #[argh(switch)]
    pub skip_frequency: bool,

    /// recompute with the sequential baseline and fail on any difference
    #[argh(switch)]
    pub verify: bool,

    /// benchmark mode: time every strategy on prefixes of the library and exit
    #[argh(switch)]
    pub benchmark: bool,

    /// comma-separated library sizes for benchmark mode (default: 10,100,1000,10000)
    #[argh(option, default = "String::from(\"10,100,1000,10000\")")]
    pub benchmark_sizes: String,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// hide progress bars
    #[argh(switch)]
    pub quiet: bool,

    /// path to TOML configuration file (explicit command line options take precedence)
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
