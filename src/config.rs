//! Configuration file support for cran-skeleton.
//!
//! Provides YAML-based configuration through `cran-skeleton.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cran-skeleton.config.yml";

/// Repository used when neither the command line nor the config names one.
pub const DEFAULT_CRAN_URL: &str = "https://cran.r-project.org/src/contrib/";

/// Output directory used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub cran_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying CLI > config > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cran_url: String,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Merges command-line values over the config file over the defaults.
    pub fn merge(
        cli_cran_url: Option<String>,
        cli_output_dir: Option<PathBuf>,
        config: Option<ConfigFile>,
    ) -> Self {
        let config = config.unwrap_or_default();

        Self {
            cran_url: cli_cran_url
                .or(config.cran_url)
                .unwrap_or_else(|| DEFAULT_CRAN_URL.to_string()),
            output_dir: cli_output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref cran_url) = config.cran_url {
        if cran_url.trim().is_empty() {
            bail!(
                "Invalid config: cran_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use {} or name a repository or mirror directory.",
                DEFAULT_CRAN_URL
            );
        }
    }

    if let Some(ref output_dir) = config.output_dir {
        if output_dir.as_os_str().is_empty() {
            bail!(
                "Invalid config: output_dir must not be empty.\n\n\
                 💡 Hint: Remove the key to write recipes into the current directory."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
