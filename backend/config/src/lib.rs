//! `discordx-config`: bot configuration.
//!
//! Provides:
//! - Typed config schema (Discord connection, logging)
//! - YAML loading with `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::{apply_all_defaults, apply_all_defaults_with};
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config};
pub use schema::{CommandScope, DiscordConfig, DiscordxConfig, LoggingConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::Result;
use std::path::Path;

/// Load a config file, substitute env vars, apply defaults and validate it.
///
/// Validation problems are returned in the report rather than logged, since
/// the logger is usually configured from the result.
pub async fn load_and_prepare(path: &Path) -> Result<(DiscordxConfig, ValidationReport)> {
    let config = apply_all_defaults(load_config(path).await?);
    let report = validate(&config);
    Ok((config, report))
}

/// Log every finding in `report` and fail if it holds errors.
pub fn enforce(report: &ValidationReport, path: &Path) -> Result<()> {
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        anyhow::bail!("{} config error(s) in {}", report.errors.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_config_is_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "discord:\n  token: abc\n  guildId: 0\n").unwrap();

        let (config, report) = load_and_prepare(&path).await.unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        let err = enforce(&report, &path).unwrap_err();
        assert!(err.to_string().contains("1 config error(s)"));
    }

    #[tokio::test]
    async fn valid_config_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "discord:\n  token: abc\n  guildId: \"99\"\n").unwrap();

        let (config, report) = load_and_prepare(&path).await.unwrap();
        assert_eq!(config.discord.command_scope(), CommandScope::Guild(99));
        assert!(enforce(&report, &path).is_ok());
    }
}
