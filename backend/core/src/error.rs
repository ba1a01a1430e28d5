use thiserror::Error;

/// Raised while populating a command registry.
///
/// Registration runs once at start-up, so either variant means the bot's own
/// setup code is wrong. Callers should abort start-up rather than continue
/// with one of the two handlers silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("[{0}] duplicate command name")]
    DuplicateCommand(String),

    #[error("[{0}] duplicate component custom id")]
    DuplicateComponent(String),
}

/// Raised when a builder description cannot be turned into a valid payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("action row is empty")]
    EmptyRow,

    #[error("action row cannot mix buttons and select menus")]
    MixedRow,

    #[error("action row holds at most one select menu")]
    TooManySelectMenus,

    #[error("action row holds at most {max} buttons, got {got}")]
    TooManyButtons { max: usize, got: usize },

    #[error("custom emoji id is not a snowflake: {0}")]
    InvalidEmojiId(String),

    #[error("select menu `{custom_id}`: min_values {min} exceeds max_values {max}")]
    InvalidValueRange { custom_id: String, min: u8, max: u8 },
}

/// Error returned by the gateway-facing entry points.
#[derive(Debug, Error)]
pub enum DiscordxError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("gateway error: {0}")]
    Gateway(#[from] serenity::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_errors_name_the_offending_key() {
        let cmd = RegistryError::DuplicateCommand("ping".into());
        let cpn = RegistryError::DuplicateComponent("vote-btn".into());
        assert_eq!(cmd.to_string(), "[ping] duplicate command name");
        assert_eq!(cpn.to_string(), "[vote-btn] duplicate component custom id");
    }

    #[test]
    fn registry_error_converts_into_top_level() {
        let err: DiscordxError = RegistryError::DuplicateCommand("ping".into()).into();
        assert!(matches!(err, DiscordxError::Registry(_)));
        assert!(err.to_string().contains("[ping]"));
    }
}
