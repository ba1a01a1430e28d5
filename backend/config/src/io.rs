//! Config file location and loading.

use crate::env::resolve_env_vars;
use crate::schema::DiscordxConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the config directory.
/// Priority: `DISCORDX_CONFIG_DIR` env > `~/.discordx/` > `./.discordx`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DISCORDX_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".discordx"))
        .unwrap_or_else(|| PathBuf::from(".discordx"))
}

pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Read a YAML config, substituting `${VAR}` references from the environment.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<DiscordxConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(DiscordxConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&raw, resolve_env_vars)
        .with_context(|| format!("Failed to load config at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Parse YAML text, running `resolve` over the value tree before typing it.
pub(crate) fn parse_config(
    raw: &str,
    resolve: impl FnOnce(&Value) -> Result<Value>,
) -> Result<DiscordxConfig> {
    // An empty file parses as null.
    let value: Value = serde_yaml::from_str::<Option<Value>>(raw)
        .context("Invalid YAML")?
        .unwrap_or_else(|| Value::Object(Default::default()));
    let value = resolve(&value)?;
    serde_json::from_value(value).context("Config does not match schema")
}
