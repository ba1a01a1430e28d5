pub mod discord;

pub use discord::{command_payloads, publish_commands, DiscordAdapter, Publication};
