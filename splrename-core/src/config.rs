use crate::error::AppError;
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk configuration, loaded from `.splrename/config.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Timestamp format rendered into the `[SD]` token, strftime syntax
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Zero-pad mask for the `[N]` token; its length is the pad width
    #[serde(default = "default_seq_format")]
    pub seq_format: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            seq_format: default_seq_format(),
        }
    }
}

fn default_time_format() -> String {
    "%Y%m%d_%H%M".to_string()
}

fn default_seq_format() -> String {
    "000".to_string()
}

impl Config {
    /// Load config from `.splrename/config.toml` if it exists.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".splrename").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Settings for a single run, resolved once before any engine starts.
///
/// Mode selection lives in the CLI subcommand; everything the engines need
/// beyond the input records is carried here.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub time_format: String,
    pub seq_width: usize,
}

impl RunConfig {
    /// Combine config-file defaults with per-invocation overrides.
    pub fn resolve(
        config: &Config,
        time_format: Option<&str>,
        seq_format: Option<&str>,
    ) -> Result<Self, AppError> {
        let time_format = time_format
            .unwrap_or(&config.defaults.time_format)
            .to_string();
        validate_time_format(&time_format)?;

        let seq_format = seq_format.unwrap_or(&config.defaults.seq_format);
        Ok(Self {
            time_format,
            seq_width: seq_format.len(),
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            seq_width: default_seq_format().len(),
        }
    }
}

/// Reject strftime strings chrono cannot render, so formatting later in the
/// run cannot panic.
fn validate_time_format(format: &str) -> Result<(), AppError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::BadTimeFormat(format.to_string()));
    }
    Ok(())
}
