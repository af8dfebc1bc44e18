//! Shell configuration
//!
//! Settings are read from an optional `reel.toml` file and then from
//! `REEL_`-prefixed environment variables, with the environment taking
//! precedence.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level shell configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShellConfig {
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the video catalog comes from
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a catalog file; the built-in sample catalog when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// How the shell presents itself
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Prompt printed before each command line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "reel> ".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from `reel.toml` (or `$REEL_CONFIG`) and the
    /// environment.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path =
            std::env::var("REEL_CONFIG").unwrap_or_else(|_| "reel.toml".to_string());
        if std::path::Path::new(&config_path).exists() {
            settings = settings.add_source(config::File::with_name(&config_path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("REEL")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
