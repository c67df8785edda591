//! mirror - Flip every image in a directory tree horizontally.
//!
//! Usage:
//!   mirror --input <DIR>                  Mirror into ./output
//!   mirror --input <DIR> --output <DIR>   Mirror into a chosen directory
//!   mirror --input <DIR> -j 0             Transform on all cores
//!   mirror --help                         Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::Section;
use color_eyre::eyre::{Context, Result, eyre};
use tracing_subscriber::EnvFilter;

use mirror_walk::{HorizontalFlip, MirrorConfig, TraversalStats, TreeWalker};

const USAGE: &str = "Usage: mirror --input <DIR> [--output <DIR>]";

#[derive(Parser)]
#[command(
    name = "mirror",
    version,
    about = "Flip every image in a directory tree horizontally",
    long_about = "mirror walks an input directory, recreates its subdirectories under \
                  an output directory and writes a horizontally mirrored copy of every \
                  image (jpg, jpeg, png, gif, bmp, tiff, webp) at the same relative path. \
                  Other files are skipped."
)]
struct Cli {
    /// Directory to read images from
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write mirrored images to (defaults to ./output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of transform workers (1 = sequential, 0 = one per core)
    #[arg(short, long, default_value = "1")]
    jobs: usize,

    /// Output format of the summary
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli).suggestion(USAGE)
}

/// Mirror the tree described by the parsed arguments and print the summary.
fn run(cli: Cli) -> Result<()> {
    let output = match cli.output {
        Some(output) => output,
        None => std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join("output"),
    };

    let config = MirrorConfig::builder()
        .input_root(cli.input)
        .output_root(output)
        .jobs(cli.jobs)
        .build()
        .map_err(|e| eyre!("{e}"))?;

    if matches!(cli.format, OutputFormat::Text) {
        println!("Processing images from: {}", config.input_root.display());
        println!("Saving mirrored images to: {}", config.output_root.display());
    }

    let walker = TreeWalker::new(HorizontalFlip::new());
    let stats = walker.run(&config).wrap_err("Failed to process images")?;

    match cli.format {
        OutputFormat::Text => print_summary(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}

/// Install the log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Print the caller-facing counts.
fn print_summary(stats: &TraversalStats) {
    println!("Successfully processed {} images", stats.processed);
    if stats.skipped > 0 {
        println!("Skipped {} non-image files", stats.skipped);
    }
    if !stats.is_success() {
        println!("Failed to process {} files", stats.errors);
        for failure in &stats.failures {
            println!("  {}: {}", failure.path.display(), failure.message);
        }
    }
    println!(
        "Finished in {:.2}s ({})",
        stats.duration.as_secs_f64(),
        stats.summary()
    );
}
