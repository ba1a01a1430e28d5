//! Interaction dispatch: route inbound interactions to registered handlers.

use anyhow::Result;
use serenity::all::{Context, Interaction};
use tracing::{debug, info};

use crate::registry::CommandSettings;

// ---------------------------------------------------------------------------
// Routing key
// ---------------------------------------------------------------------------

/// The registry key an interaction is routed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionKey {
    /// Application command name.
    Command(String),
    /// Message component custom id.
    Component(String),
}

impl InteractionKey {
    /// Extract the routing key, or `None` for interaction kinds that are not
    /// routed through the registry (ping, autocomplete, modal submit).
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        match interaction {
            Interaction::Command(cmd) => Some(Self::Command(cmd.data.name.clone())),
            Interaction::Component(cpn) => Some(Self::Component(cpn.data.custom_id.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for InteractionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(name) => write!(f, "/{name}"),
            Self::Component(custom_id) => write!(f, "component `{custom_id}`"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// What happened to an interaction handed to [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled(InteractionKey),
    /// Stale or foreign command/component; nothing is registered for it.
    NoHandler(InteractionKey),
    /// Interaction kind the registry does not route.
    Unrouted,
}

/// Result of looking an interaction up, before any handler runs.
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a, H> {
    Found(InteractionKey, &'a H),
    NoHandler(InteractionKey),
    Unrouted,
}

/// Find the handler an interaction should go to.
pub fn route<'a, C, H>(settings: &'a CommandSettings<C, H>, interaction: &Interaction) -> Route<'a, H> {
    let Some(key) = InteractionKey::from_interaction(interaction) else {
        return Route::Unrouted;
    };
    match settings.resolve(&key) {
        Some(handler) => Route::Found(key, handler),
        None => Route::NoHandler(key),
    }
}

/// Resolve the interaction's handler and run it.
///
/// A miss is not an error. Handler errors are returned to the caller.
pub async fn dispatch(
    settings: &CommandSettings,
    ctx: Context,
    interaction: Interaction,
) -> Result<DispatchOutcome> {
    let (key, handler) = match route(settings, &interaction) {
        Route::Found(key, handler) => (key, handler),
        Route::NoHandler(key) => {
            debug!(key = %key, "No handler registered; ignoring interaction");
            return Ok(DispatchOutcome::NoHandler(key));
        }
        Route::Unrouted => return Ok(DispatchOutcome::Unrouted),
    };

    info!(key = %key, "Dispatching interaction");
    handler.handle(ctx, interaction).await?;
    Ok(DispatchOutcome::Handled(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlashCommand;
    use serde_json::{json, Value};

    type Settings = CommandSettings<SlashCommand, &'static str>;

    fn user() -> Value {
        json!({ "id": "80351110224678912", "username": "nelly" })
    }

    /// Gateway payload for an application command or autocomplete interaction.
    fn command_payload(kind: u8, name: &str) -> Interaction {
        serde_json::from_value(json!({
            "id": "1100000000000000001",
            "application_id": "1100000000000000002",
            "type": kind,
            "data": { "id": "1100000000000000003", "name": name, "type": 1 },
            "channel_id": "1100000000000000004",
            "user": user(),
            "token": "interaction-token",
            "version": 1,
            "locale": "en-US",
            "entitlements": [],
            "attachment_size_limit": 8388608
        }))
        .unwrap()
    }

    /// Gateway payload for a button press on a bot message.
    fn button_payload(custom_id: &str) -> Interaction {
        serde_json::from_value(json!({
            "id": "1100000000000000011",
            "application_id": "1100000000000000002",
            "type": 3,
            "data": { "custom_id": custom_id, "component_type": 2 },
            "channel_id": "1100000000000000004",
            "user": user(),
            "token": "interaction-token",
            "version": 1,
            "message": {
                "id": "1100000000000000012",
                "channel_id": "1100000000000000004",
                "author": { "id": "1100000000000000002", "username": "bot", "bot": true },
                "content": "Pong!",
                "timestamp": "2024-05-01T12:00:00.000000+00:00",
                "edited_timestamp": null,
                "tts": false,
                "mention_everyone": false,
                "mentions": [],
                "mention_roles": [],
                "attachments": [],
                "embeds": [],
                "pinned": false,
                "type": 0
            },
            "locale": "en-US",
            "entitlements": [],
            "attachment_size_limit": 8388608
        }))
        .unwrap()
    }

    fn settings() -> Settings {
        let mut settings = Settings::new();
        settings.add_command(SlashCommand::new("ping", "test"), "ping-handler").unwrap();
        settings.add_component("ping-again", "again-handler").unwrap();
        settings
    }

    #[test]
    fn display_distinguishes_commands_from_components() {
        let cmd = InteractionKey::Command("ping".into());
        let cpn = InteractionKey::Component("ping-again".into());
        assert_eq!(cmd.to_string(), "/ping");
        assert_eq!(cpn.to_string(), "component `ping-again`");
    }

    #[test]
    fn keys_with_same_text_are_distinct() {
        assert_ne!(
            InteractionKey::Command("poll".into()),
            InteractionKey::Component("poll".into())
        );
    }

    #[test]
    fn keys_come_from_the_interaction_kind() {
        assert_eq!(
            InteractionKey::from_interaction(&command_payload(2, "ping")),
            Some(InteractionKey::Command("ping".into()))
        );
        assert_eq!(
            InteractionKey::from_interaction(&button_payload("ping-again")),
            Some(InteractionKey::Component("ping-again".into()))
        );
        assert_eq!(InteractionKey::from_interaction(&command_payload(4, "ping")), None);
    }

    #[test]
    fn registered_keys_route_to_their_handlers() {
        let settings = settings();
        assert_eq!(
            route(&settings, &command_payload(2, "ping")),
            Route::Found(InteractionKey::Command("ping".into()), &"ping-handler")
        );
        assert_eq!(
            route(&settings, &button_payload("ping-again")),
            Route::Found(InteractionKey::Component("ping-again".into()), &"again-handler")
        );
    }

    #[test]
    fn unknown_keys_are_a_miss_not_an_error() {
        let settings = settings();
        assert_eq!(
            route(&settings, &command_payload(2, "pang")),
            Route::NoHandler(InteractionKey::Command("pang".into()))
        );
        // Namespaces are separate: a button named like a command still misses.
        assert_eq!(
            route(&settings, &button_payload("ping")),
            Route::NoHandler(InteractionKey::Component("ping".into()))
        );
    }

    #[test]
    fn autocomplete_is_not_routed() {
        assert_eq!(route(&settings(), &command_payload(4, "ping")), Route::Unrouted);
    }
}
