//! Config schema, deserialized from YAML with camelCase keys.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordxConfig {
    #[serde(default)]
    pub discord: DiscordConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordConfig {
    /// Bot token. Usually `${DISCORD_TOKEN}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Guild to publish commands to. Absent means global commands.
    #[serde(
        default,
        deserialize_with = "deserialize_snowflake",
        skip_serializing_if = "Option::is_none"
    )]
    pub guild_id: Option<u64>,

    /// Upload the registered commands on ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_commands: Option<bool>,
}

impl DiscordConfig {
    /// Where registered commands are published.
    pub fn command_scope(&self) -> CommandScope {
        match self.guild_id {
            Some(id) => CommandScope::Guild(id),
            None => CommandScope::Global,
        }
    }
}

/// Publication target for application commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    Global,
    Guild(u64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "discordx=debug".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for the rolling JSON log. Console only when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Snowflakes may arrive as numbers or, after `${VAR}` substitution, as strings.
fn deserialize_snowflake<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid snowflake: {s}"))),
    }
}
