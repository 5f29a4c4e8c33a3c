//! End-to-end run: load the GRID file, convert, serialize, write.
//!
//! The output file is only written once the whole batch has converted, so a
//! failed run leaves no partial file behind.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::batch::{convert_institutes, BatchOptions, BatchStats};
use crate::error::Result;
use crate::grid::load_dataset;
use crate::mapping::UriMinter;
use crate::serialize::{write_graph, OutputFormat};
use crate::Config;

/// Everything a run reports back to its caller.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub version: String,
    pub input_sha256: String,
    pub stats: BatchStats,
    pub triple_count: usize,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub elapsed: Duration,
}

/// Resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub minter: UriMinter,
    pub batch: BatchOptions,
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        Self {
            input_path: config.input_path().to_path_buf(),
            output_path: config.output_path().to_path_buf(),
            format: config.grid2vivo.format,
            minter: UriMinter::new(config.grid2vivo.namespace.clone()),
            batch: BatchOptions {
                progress_interval: config.grid2vivo.progress_interval,
                unknown_relationship: config.mapping.unknown_relationship,
            },
        }
    }
}

/// Run a full conversion.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let start = Instant::now();

    let loaded = load_dataset(&options.input_path)?;
    let outcome = convert_institutes(&options.minter, &loaded.dataset.institutes, &options.batch)?;

    let mut buffer = Vec::new();
    write_graph(options.format, &outcome.graph, &mut buffer)?;
    write_output(&options.output_path, &buffer)?;

    log::info!(
        "Wrote {} triples ({}) to {}",
        outcome.graph.len(),
        options.format,
        options.output_path.display()
    );

    Ok(RunSummary {
        version: loaded.dataset.version,
        input_sha256: loaded.sha256,
        stats: outcome.stats,
        triple_count: outcome.graph.len(),
        output_path: options.output_path.clone(),
        format: options.format,
        elapsed: start.elapsed(),
    })
}

/// Write to a sibling temp file first and rename it into place.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, content)?;
    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    Ok(())
}
