mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const PORT_ENV: &str = "PORT";

/// Loads the config file named by `CONFIG_PATH` (falling back to built-in defaults
/// when it does not exist), then applies `GEMINI_API_KEY` and `PORT`.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_file(Path::new(&config_path)).await?;
    let config = apply_overrides(
        config,
        env::var(API_KEY_ENV).ok(),
        env::var(PORT_ENV).ok(),
    )?;
    validate(&config)?;

    Ok(config)
}

pub async fn load_file(path: &Path) -> Result<Config> {
    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

pub fn apply_overrides(
    mut config: Config,
    api_key: Option<String>,
    port: Option<String>,
) -> Result<Config> {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }
    config.llm.api_key = config.llm.api_key.trim().to_string();

    if let Some(port) = port {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid {}: '{}'", PORT_ENV, port)))?;
    }

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "No API key configured; set {} or llm.api_key",
            API_KEY_ENV
        )));
    }
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    if config.llm.request_timeout_secs == Some(0) {
        return Err(Error::config(
            "llm.request_timeout_secs must be at least 1; omit it for no timeout",
        ));
    }
    Ok(())
}
