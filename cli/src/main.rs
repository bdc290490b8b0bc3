use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kinesis_battle::{ChartKind, ReferenceTables};
use kinesis_features::{ExtractorConfig, FeatureExtractor, WorkerPool};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Turn recorded battle logs into feature tables")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one feature row per battle from a JSONL file
    Extract {
        /// Line-delimited battle records
        #[arg(short, long)]
        input: PathBuf,

        /// CSV destination (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extractor config as JSON (all feature groups if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Species table JSON merged over the built-in one
        #[arg(short, long)]
        species: Option<PathBuf>,

        /// Worker threads (0 = all cores)
        #[arg(short, long, default_value_t = 0)]
        threads: usize,

        /// Type chart, overriding the config ("gen1" or "modern")
        #[arg(long)]
        chart: Option<ChartKind>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            output,
            config,
            species,
            threads,
            chart,
        } => extract(input, output, config, species, threads, chart),
    }
}

/// Initialize logging to stderr, leaving stdout for CSV output.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn extract(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    species: Option<PathBuf>,
    threads: usize,
    chart: Option<ChartKind>,
) -> Result<()> {
    let mut config = match config {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ExtractorConfig::from_json(&json)?
        }
        None => ExtractorConfig::full(),
    };
    if let Some(chart) = chart {
        config = config.with_chart(chart);
    }

    let mut tables = ReferenceTables::for_chart(config.chart);
    if let Some(path) = species {
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read species table {}", path.display()))?;
        tables = tables.with_species_json(&json)?;
    }

    let log = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    tracing::info!(
        input = %input.display(),
        groups = config.groups.len(),
        chart = ?config.chart,
        threads,
        "Extracting features"
    );

    let extractor = FeatureExtractor::new(Arc::new(tables), config);
    let outcome = extractor.extract_lines(&log, WorkerPool::with_workers(threads))?;

    if outcome.table.is_empty() && !outcome.failures.is_empty() {
        bail!(
            "No battle in {} could be extracted ({} failed)",
            input.display(),
            outcome.failures.len()
        );
    }

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            outcome.table.write_csv(BufWriter::new(file))?;
            tracing::info!(
                output = %path.display(),
                rows = outcome.table.len(),
                skipped = outcome.failures.len(),
                "Wrote feature table"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            outcome.table.write_csv(&mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
