use std::path::PathBuf;

use eyre::{Result, WrapErr};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::summarize::{DEFAULT_MODEL, GEMINI_ENDPOINT};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub model: Option<String>,
    pub languages: Option<Vec<String>>,
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytnotes/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config =
                toml::from_str(&content).wrap_err_with(|| format!("invalid config file {}", path.display()))?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Merge command-line overrides over the file, then fall back to built-in defaults
    pub fn resolve(self, overrides: Overrides) -> Settings {
        let languages = Some(overrides.languages)
            .filter(|l| !l.is_empty())
            .or(self.languages.filter(|l| !l.is_empty()))
            .unwrap_or_else(|| vec![DEFAULT_LANGUAGE.to_string()]);

        Settings {
            model: overrides
                .model
                .or(self.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            languages,
            endpoint: overrides
                .endpoint
                .or(self.endpoint)
                .unwrap_or_else(|| GEMINI_ENDPOINT.to_string()),
        }
    }
}

/// Values given on the command line; empty means "not given"
#[derive(Debug, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub languages: Vec<String>,
    pub endpoint: Option<String>,
}

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub model: String,
    pub languages: Vec<String>,
    pub endpoint: String,
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytnotes")
        .join("config.toml")
}
