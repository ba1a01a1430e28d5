/// Slash command descriptors.
use serenity::all::Permissions;
use serenity::builder::{CreateCommand, CreateCommandOption};

/// Anything the registry can store as a command descriptor.
///
/// The registry only needs the name to enforce uniqueness; the rest of the
/// descriptor is passed through untouched to the bulk publication call.
pub trait NamedCommand {
    fn name(&self) -> &str;
}

/// A chat-input command: serenity's [`CreateCommand`] plus the name it was
/// created with (the builder does not expose it back).
#[derive(Debug, Clone)]
pub struct SlashCommand {
    name: String,
    description: String,
    builder: CreateCommand,
}

impl SlashCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();
        let builder = CreateCommand::new(name.clone()).description(description.clone());
        Self { name, description, builder }
    }

    pub fn option(mut self, option: CreateCommandOption) -> Self {
        self.builder = self.builder.add_option(option);
        self
    }

    /// Restrict the command to members holding `permissions` by default.
    pub fn default_member_permissions(mut self, permissions: Permissions) -> Self {
        self.builder = self.builder.default_member_permissions(permissions);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.builder = self.builder.nsfw(nsfw);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn builder(&self) -> &CreateCommand {
        &self.builder
    }

    /// JSON payload that will be uploaded for this command.
    pub fn manifest(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.builder)
    }
}

impl NamedCommand for SlashCommand {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::CommandOptionType;

    #[test]
    fn manifest_carries_name_and_description() {
        let cmd = SlashCommand::new("ping", "Check the bot is alive");
        let json = cmd.manifest().unwrap();
        assert_eq!(cmd.name(), "ping");
        assert_eq!(json["name"], "ping");
        assert_eq!(json["description"], "Check the bot is alive");
    }

    #[test]
    fn options_are_kept_in_order() {
        let cmd = SlashCommand::new("poll", "Start a poll")
            .option(CreateCommandOption::new(CommandOptionType::String, "question", "What to ask").required(true))
            .option(CreateCommandOption::new(CommandOptionType::Integer, "minutes", "How long to run"));
        let json = cmd.manifest().unwrap();
        let options = json["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0]["name"], "question");
        assert_eq!(options[1]["name"], "minutes");
    }

    #[test]
    fn permissions_are_sent_as_bitfield_string() {
        let cmd = SlashCommand::new("purge", "Delete recent messages")
            .default_member_permissions(Permissions::MANAGE_MESSAGES);
        let json = cmd.manifest().unwrap();
        assert_eq!(json["default_member_permissions"], "8192");
        assert_eq!(cmd.description(), "Delete recent messages");
    }
}
