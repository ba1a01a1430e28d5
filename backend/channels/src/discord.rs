use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use discordx_commands::{dispatch, CommandSettings, DispatchOutcome};
use discordx_core::DiscordxError;
use discordx_logging::redact_sensitive_data;
use serenity::all::{Command, CreateCommand, GuildId, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, error, info};

/// Where registered commands are uploaded when the bot connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    /// Global commands; propagation can take a while.
    Global,
    /// Guild commands; available immediately, handy during development.
    Guild(u64),
    /// Leave whatever is already registered on Discord alone.
    Skip,
}

struct Handler {
    settings: Arc<CommandSettings>,
    publication: Publication,
    published: AtomicBool,
}

impl Handler {
    fn new(settings: Arc<CommandSettings>, publication: Publication) -> Self {
        Self { settings, publication, published: AtomicBool::new(false) }
    }

    /// Claim the single upload this handler performs. Later sessions keep
    /// the commands already on Discord.
    fn claim_publication(&self) -> bool {
        self.publication != Publication::Skip && !self.published.swap(true, Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");

        if !self.claim_publication() {
            return;
        }
        match publish_commands(&ctx, &self.settings, self.publication).await {
            Ok(count) => info!(count, scope = ?self.publication, "Published commands"),
            Err(e) => {
                // Let the next session retry.
                self.published.store(false, Ordering::SeqCst);
                error!("Failed to publish commands: {}", redact_sensitive_data(&e.to_string()));
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match dispatch(&self.settings, ctx, interaction).await {
            Ok(DispatchOutcome::Handled(key)) => debug!(key = %key, "Interaction handled"),
            Ok(DispatchOutcome::NoHandler(_) | DispatchOutcome::Unrouted) => {}
            Err(e) => error!("Interaction handler failed: {}", redact_sensitive_data(&format!("{e:?}"))),
        }
    }
}

/// Command payloads in registration order.
pub fn command_payloads(settings: &CommandSettings) -> Vec<CreateCommand> {
    settings.commands().iter().map(|c| c.builder().clone()).collect()
}

/// Bulk-overwrite the bot's commands with the registry's, returning how many
/// were uploaded.
pub async fn publish_commands(
    ctx: &Context,
    settings: &CommandSettings,
    publication: Publication,
) -> Result<usize, DiscordxError> {
    let payloads = command_payloads(settings);
    let published = match publication {
        Publication::Skip => return Ok(0),
        Publication::Global => Command::set_global_commands(ctx, payloads).await?,
        Publication::Guild(id) => GuildId::new(id).set_commands(ctx, payloads).await?,
    };
    Ok(published.len())
}

pub struct DiscordAdapter {
    token: String,
    settings: Arc<CommandSettings>,
    publication: Publication,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>, settings: Arc<CommandSettings>, publication: Publication) -> Self {
        Self { token: token.into(), settings, publication }
    }

    pub fn name(&self) -> &str {
        "discord"
    }

    /// Connect and run the gateway until the client stops.
    pub async fn start(&self) -> Result<(), DiscordxError> {
        info!(
            commands = self.settings.len(),
            components = self.settings.component_ids().len(),
            "Starting Discord adapter"
        );

        // Interactions arrive without privileged intents.
        let intents = GatewayIntents::GUILDS;

        let mut client = Client::builder(&self.token, intents)
            .event_handler(Handler::new(Arc::clone(&self.settings), self.publication))
            .await?;

        if let Err(why) = client.start().await {
            error!("Client error: {}", redact_sensitive_data(&why.to_string()));
            return Err(why.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discordx_commands::{handler_fn, SlashCommand};
    use serenity::all::{Context, Interaction};

    async fn noop(_ctx: Context, _interaction: Interaction) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn payloads_follow_registration_order() {
        let handler = handler_fn(noop);
        let mut settings = CommandSettings::new();
        for name in ["zeta", "alpha", "mid"] {
            settings.add_command(SlashCommand::new(name, "test"), handler.clone()).unwrap();
        }

        let names: Vec<_> = command_payloads(&settings)
            .iter()
            .map(|c| serde_json::to_value(c).unwrap()["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn commands_are_published_once_per_adapter() {
        let handler = Handler::new(Arc::new(CommandSettings::new()), Publication::Global);
        assert!(handler.claim_publication());
        assert!(!handler.claim_publication());
        assert!(!handler.claim_publication());
    }

    #[test]
    fn skip_never_claims_publication() {
        let handler = Handler::new(Arc::new(CommandSettings::new()), Publication::Skip);
        assert!(!handler.claim_publication());
    }

    #[test]
    fn adapter_reports_its_name() {
        let adapter = DiscordAdapter::new("token", Arc::new(CommandSettings::new()), Publication::Skip);
        assert_eq!(adapter.name(), "discord");
    }
}
