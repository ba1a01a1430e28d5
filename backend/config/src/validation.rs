//! Config validation.

use crate::schema::DiscordxConfig;
use thiserror::Error;

const KNOWN_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// Errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError { path: path.into(), message: message.into() });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError { path: path.into(), message: message.into() });
    }
}

pub fn validate(config: &DiscordxConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_discord(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_discord(config: &DiscordxConfig, report: &mut ValidationReport) {
    let discord = &config.discord;
    match discord.token.as_deref().map(str::trim) {
        None | Some("") => report.error("discord.token", "Bot token is required"),
        Some(token) if token.starts_with("Bot ") => {
            report.error("discord.token", "Bot token must not carry the \"Bot \" prefix");
        }
        Some(token) if token.contains(char::is_whitespace) => {
            report.error("discord.token", "Bot token must not contain whitespace");
        }
        Some(_) => {}
    }
    if discord.guild_id == Some(0) {
        report.error("discord.guildId", "Guild id cannot be 0");
    }
    if discord.publish_commands == Some(false) {
        report.warn("discord.publishCommands", "Commands will not be uploaded on ready");
    }
}

fn validate_logging(config: &DiscordxConfig, report: &mut ValidationReport) {
    let Some(level) = &config.logging.level else { return };
    // Directives like "discordx=debug" are passed to the filter as-is.
    if !level.contains('=') && !KNOWN_LEVELS.contains(&level.to_lowercase().as_str()) {
        report.warn("logging.level", format!("Unknown log level '{level}'"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_token(token: &str) -> DiscordxConfig {
        let mut config = DiscordxConfig::default();
        config.discord.token = Some(token.into());
        config
    }

    #[test]
    fn token_is_required() {
        let report = validate(&DiscordxConfig::default());
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "discord.token");
    }

    #[test]
    fn valid_minimal_config() {
        let report = validate(&with_token("abc.def.ghi"));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn zero_guild_is_an_error() {
        let mut config = with_token("abc");
        config.discord.guild_id = Some(0);
        let report = validate(&config);
        assert!(report.errors.iter().any(|e| e.path == "discord.guildId"));
    }

    #[test]
    fn odd_values_warn() {
        let mut config = with_token("Bot abc");
        config.logging.level = Some("verbose".into());
        let report = validate(&config);
        assert!(report.errors.iter().any(|e| e.message.contains("prefix")));
        assert!(report.warnings.iter().any(|w| w.path == "logging.level"));

        let mut config = with_token("abc");
        config.logging.level = Some("discordx=debug".into());
        assert!(validate(&config).warnings.is_empty());
    }
}
