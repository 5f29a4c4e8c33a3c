use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::batch::RelationshipPolicy;
use crate::mapping::DEFAULT_NAMESPACE;
use crate::serialize::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid2vivo: Grid2VivoConfig,
    #[serde(default)]
    pub mapping: MappingConfig,
    /// File the values were read from; `None` when running on built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Paths, output format and URI namespace for a run
#[derive(Debug, Clone, Deserialize)]
pub struct Grid2VivoConfig {
    /// GRID dataset to read (`{ "version": ..., "institutes": [...] }`).
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// Where the triples are written once the whole batch has been converted.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    /// Namespace every institution URI is minted under.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log a progress line every N institutes read.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for Grid2VivoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            format: OutputFormat::default(),
            namespace: default_namespace(),
            log_level: default_log_level(),
            progress_interval: default_progress_interval(),
        }
    }
}

/// Mapping behaviour configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub unknown_relationship: RelationshipPolicy,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("../grid/grid.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("grid.rdf")
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_progress_interval() -> usize {
    100
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in GRID2VIVO_CONFIG environment variable (must exist)
    /// 2. ./config.toml in current directory (built-in defaults when absent)
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let config = match std::env::var("GRID2VIVO_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Parse a config file without consulting the environment
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.source = Some(config_path.to_path_buf());
        Ok(config)
    }

    /// One line describing where the configuration came from, for the startup log
    pub fn describe_source(&self) -> String {
        match &self.source {
            Some(path) => format!("Loaded config from {}", path.display()),
            None => "No config.toml found, using built-in defaults".to_string(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let namespace = &self.grid2vivo.namespace;
        if namespace.is_empty() {
            anyhow::bail!("grid2vivo.namespace must not be empty");
        }

        if !(namespace.ends_with('/') || namespace.ends_with('#')) {
            anyhow::bail!(
                "grid2vivo.namespace must end with '/' or '#': {}",
                namespace
            );
        }

        if let Err(e) = oxrdf::NamedNode::new(namespace.as_str()) {
            anyhow::bail!("grid2vivo.namespace is not a valid IRI ({}): {}", e, namespace);
        }

        if self.grid2vivo.progress_interval == 0 {
            anyhow::bail!("grid2vivo.progress_interval must be greater than 0");
        }

        Ok(())
    }

    /// Get input dataset path
    pub fn input_path(&self) -> &Path {
        &self.grid2vivo.input_path
    }

    /// Get output triples path
    pub fn output_path(&self) -> &Path {
        &self.grid2vivo.output_path
    }
}
