//! User configuration.
//!
//! Stored as JSON; every field is optional and falls back to its default.
//!
//! ```json
//! { "display": { "color": false, "json": true } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use ANSI colors in console output
    pub color: bool,
    /// Print JSON instead of text
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Load from `path`, using defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let config = Self::load(path)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
