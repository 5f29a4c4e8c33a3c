use anyhow::Result;
use clap::Parser;
use grid2vivo::pipeline::{self, RunOptions};
use grid2vivo::serialize::OutputFormat;
use grid2vivo::Config;
use std::path::PathBuf;

/// Convert the GRID institute dataset into VIVO RDF.
///
/// With no arguments, paths and format come from config.toml (or the built-in
/// defaults when there is none).
#[derive(Parser, Debug)]
#[command(name = "grid2vivo")]
#[command(version, about = "Convert GRID institute data into VIVO RDF")]
struct Args {
    /// GRID dataset to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File to write the triples to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output syntax
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.grid2vivo.log_level.as_str())
    ).init();

    log::info!("Starting grid2vivo v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("{}", config.describe_source());

    let mut options = RunOptions::from(&config);
    if let Some(input) = args.input {
        options.input_path = input;
    }
    if let Some(output) = args.output {
        options.output_path = output;
    }
    if let Some(format) = args.format {
        options.format = format;
    }

    log::info!("Input: {}", options.input_path.display());
    log::info!("Output: {} ({})", options.output_path.display(), options.format);
    log::info!("Namespace: {}", options.minter.namespace());

    let summary = pipeline::run(&options)?;

    println!("Grid {}", summary.version);
    println!("{} institutes", summary.stats.read);
    println!("  Converted (active): {}", summary.stats.converted);
    println!("  Skipped (not active): {}", summary.stats.skipped_inactive);
    if !summary.stats.skipped_failed.is_empty() {
        println!(
            "  Skipped (unrecognized relationship): {}",
            summary.stats.skipped_failed.len()
        );
        for id in &summary.stats.skipped_failed {
            println!("    {}", id);
        }
    }
    println!("{} triples written to {}", summary.triple_count, summary.output_path.display());
    log::info!("Input sha256: {}", summary.input_sha256);
    log::info!("Time: {:?}", summary.elapsed);

    Ok(())
}
