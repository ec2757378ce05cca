//! # Formatter Configuration
//!
//! Settings are layered, each layer overriding the previous one:
//! 1. Built-in defaults.
//! 2. A JSON file, `MIPSFMT_CONFIG` or `config.json` in the platform
//!    config directory chosen with [`directories`].
//! 3. The `MIPSFMT_TAB_WIDTH` environment variable.
//!
//! Command-line flags are applied on top by the binary.

use std::{
    env::var,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    constants::{CONFIG_NAME, DEFAULT_TAB_WIDTH},
    env_variables::EnvVariable,
    lexer::FormatError,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(default)]
pub struct FormatterConfig {
    /// Width of one tab stop, used to compute comment columns.
    pub tab_width: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl FormatterConfig {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    pub fn validate(&self) -> Result<(), FormatError> {
        match self.tab_width {
            0 => Err(FormatError::InvalidTabWidth(0)),
            _ => Ok(()),
        }
    }

    /// Loads the config file if there is one, then applies the environment.
    pub fn load() -> Result<Self> {
        let config = match Self::path()? {
            Some(path) => Self::load_from(&path)?.unwrap_or_default(),
            None => Self::default(),
        };
        let config = config.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file, `None` if it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No config file at {:?}", path);
            return Ok(None);
        }
        let data =
            read_to_string(path).context(format!("Failed to read config file at {:?}", path))?;
        let config = serde_json::from_str(&data)
            .context(format!("Failed to parse config file at {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(Some(config))
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        let name = EnvVariable::TabWidth.to_string();
        if let Ok(value) = var(&name) {
            self.tab_width = value
                .trim()
                .parse()
                .context(format!("{name} must be a positive integer, got {value:?}"))?;
            debug!("Tab width {} taken from {name}", self.tab_width);
        }
        Ok(self)
    }

    fn path() -> Result<Option<PathBuf>> {
        if let Ok(path) = var(EnvVariable::ConfigPath.to_string()) {
            return Ok(Some(PathBuf::from(path)));
        }
        Ok(ProjectDirs::from("com", "mipsfmt", "mipsfmt")
            .map(|dirs| dirs.config_dir().join(CONFIG_NAME)))
    }
}
