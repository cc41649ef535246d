//! Configuration loading and management.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bot identity and dispatch switches.
    #[serde(default)]
    pub bot: BotConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Dispatch configuration consumed by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Bot display name used in handler output.
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// User ids granted admin rights. Empty means nobody is admin.
    #[serde(default)]
    pub admin_users: HashSet<String>,

    /// Send usage/help output as a direct message instead of to the channel.
    /// The platform stores this flag as the literal string "1" for true.
    #[serde(default)]
    pub send_help_as_dm: String,
}

impl BotConfig {
    /// Whether help output goes to the user directly rather than the channel.
    pub fn help_as_dm(&self) -> bool {
        self.send_help_as_dm == "1"
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            admin_users: HashSet::new(),
            send_help_as_dm: String::new(),
        }
    }
}

fn default_bot_name() -> String {
    "ctfbot".to_string()
}
