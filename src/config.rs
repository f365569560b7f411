use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{check_threshold, SimError, SimResult};
use crate::similarity::bigram::is_space;
use crate::similarity::Metric;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Matching
    pub threshold: f64,
    pub metric: Metric,
    pub delimiter: char,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            metric: Metric::SorensenDice,
            delimiter: ',',
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> SimResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file gives defaults. A file that does not parse is moved
    /// aside to `<name>.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> SimResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> SimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the values can be used for matching
    pub fn validate(&self) -> SimResult<()> {
        check_threshold(self.threshold)?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// The delimiter as a single byte; must be ASCII and not whitespace
    pub fn delimiter_byte(&self) -> SimResult<u8> {
        parse_delimiter(self.delimiter)
    }
}

/// Accept a field delimiter usable by the splitter
pub fn parse_delimiter(c: char) -> SimResult<u8> {
    if !c.is_ascii() {
        return Err(SimError::Config(format!(
            "delimiter {:?} is not a single-byte character",
            c
        )));
    }
    let b = c as u8;
    if is_space(b) {
        return Err(SimError::Config("delimiter cannot be whitespace".to_string()));
    }
    Ok(b)
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("label-similarity")
        .join("config.json")
}
