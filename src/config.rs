use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookmakerCredentials {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub sportsbet_au: Option<BookmakerCredentials>,
}

impl Config {
    /// Loads `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_path(DEFAULT_CONFIG_PATH)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(
            "Loaded config from {} (sportsbet_au credentials: {})",
            path.display(),
            config.sportsbet_au.is_some()
        );
        Ok(config)
    }
}
