//! Config defaults applied after loading.

use crate::schema::DiscordxConfig;
use std::collections::HashMap;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Env var consulted when the config file carries no token.
pub const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";

pub fn apply_all_defaults(config: DiscordxConfig) -> DiscordxConfig {
    apply_all_defaults_with(config, &std::env::vars().collect())
}

/// Apply defaults, reading fallbacks from `env` (useful for testing).
pub fn apply_all_defaults_with(
    config: DiscordxConfig,
    env: &HashMap<String, String>,
) -> DiscordxConfig {
    let config = apply_discord_defaults(config, env);
    apply_logging_defaults(config)
}

fn apply_discord_defaults(mut config: DiscordxConfig, env: &HashMap<String, String>) -> DiscordxConfig {
    let discord = &mut config.discord;
    if discord.token.is_none() {
        discord.token = env.get(TOKEN_ENV_VAR).filter(|t| !t.is_empty()).cloned();
    }
    discord.publish_commands.get_or_insert(true);
    config
}

fn apply_logging_defaults(mut config: DiscordxConfig) -> DiscordxConfig {
    config.logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_values() {
        let env = HashMap::from([(TOKEN_ENV_VAR.to_string(), "from-env".to_string())]);
        let config = apply_all_defaults_with(DiscordxConfig::default(), &env);
        assert_eq!(config.discord.token.as_deref(), Some("from-env"));
        assert_eq!(config.discord.publish_commands, Some(true));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn keeps_explicit_values() {
        let mut config = DiscordxConfig::default();
        config.discord.token = Some("from-file".into());
        config.discord.publish_commands = Some(false);
        config.logging.level = Some("debug".into());

        let env = HashMap::from([(TOKEN_ENV_VAR.to_string(), "from-env".to_string())]);
        let config = apply_all_defaults_with(config, &env);
        assert_eq!(config.discord.token.as_deref(), Some("from-file"));
        assert_eq!(config.discord.publish_commands, Some(false));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }
}
