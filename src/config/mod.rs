mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), then applies
/// environment overrides and validates the result.
///
/// A missing default `config.yaml` is not an error; an explicit
/// `CONFIG_PATH` that cannot be read is.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = load_from(explicit_path.as_deref()).await?;

    config.apply_env(|key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

pub async fn load_from(path: Option<&str>) -> Result<Config> {
    load_with_default(path, DEFAULT_CONFIG_PATH).await
}

/// Like `load_from`, with `default_path` consulted when no explicit path is
/// given. A missing `default_path` yields the built-in defaults.
pub async fn load_with_default(path: Option<&str>, default_path: &str) -> Result<Config> {
    let config_path = match path {
        Some(path) => path,
        None if Path::new(default_path).exists() => default_path,
        None => {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
    };

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
