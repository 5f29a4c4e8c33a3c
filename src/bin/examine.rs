//! Dataset profiling CLI: print GRID key, status, type and relationship frequencies.

use clap::Parser;
use grid2vivo::examine::{profile_dataset, render_report};
use grid2vivo::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "examine")]
#[command(about = "Tabulate keys, statuses, types and relationship kinds in a GRID file")]
struct Args {
    /// GRID dataset to read (default: input_path from config)
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.grid2vivo.log_level.as_str())
    ).init();

    log::debug!("{}", config.describe_source());

    let path = args.input.unwrap_or_else(|| config.input_path().to_path_buf());
    log::info!("Examining {}", path.display());

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let doc: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid JSON in {}: {}", path.display(), e))?;

    let profile = profile_dataset(&doc)?;
    print!("{}", render_report(&profile));

    Ok(())
}
