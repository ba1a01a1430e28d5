//! Interaction responses.

use discordx_core::BuildError;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::component::ActionRowSpec;
use crate::embed::EmbedSpec;

/// How the bot answers an interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseKind {
    /// Reply with a new message.
    #[default]
    Message,
    /// Show "thinking…" and send the message later as a follow-up.
    DeferredMessage,
    /// Edit the message the component is attached to.
    UpdateMessage,
    /// Acknowledge a component interaction without changing anything yet.
    DeferredUpdate,
    Pong,
}

/// Message body of a response. Embeds and component rows accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseData {
    pub content: Option<String>,
    pub embeds: Vec<EmbedSpec>,
    pub components: Vec<ActionRowSpec>,
    pub ephemeral: bool,
}

impl ResponseData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embeds(mut self, embeds: impl IntoIterator<Item = EmbedSpec>) -> Self {
        self.embeds.extend(embeds);
        self
    }

    pub fn embed(mut self, embed: EmbedSpec) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn components(mut self, rows: impl IntoIterator<Item = ActionRowSpec>) -> Self {
        self.components.extend(rows);
        self
    }

    pub fn row(mut self, row: ActionRowSpec) -> Self {
        self.components.push(row);
        self
    }

    /// Only the invoking user sees the reply.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Custom ids of every interactive component in the body.
    pub fn custom_ids(&self) -> Vec<&str> {
        self.components.iter().flat_map(ActionRowSpec::custom_ids).collect()
    }

    pub fn build(self) -> Result<CreateInteractionResponseMessage, BuildError> {
        let mut message = CreateInteractionResponseMessage::new().ephemeral(self.ephemeral);
        if let Some(content) = self.content {
            message = message.content(content);
        }
        if !self.embeds.is_empty() {
            message = message.embeds(self.embeds.into_iter().map(EmbedSpec::build).collect());
        }
        if !self.components.is_empty() {
            let rows = self
                .components
                .into_iter()
                .map(ActionRowSpec::build)
                .collect::<Result<Vec<_>, _>>()?;
            message = message.components(rows);
        }
        Ok(message)
    }
}

/// Assemble a response of the given kind.
///
/// `data` is ignored for [`ResponseKind::DeferredUpdate`] and
/// [`ResponseKind::Pong`], which carry no body. For
/// [`ResponseKind::DeferredMessage`] only the ephemeral flag matters.
pub fn new_interaction_response(
    kind: ResponseKind,
    data: ResponseData,
) -> Result<CreateInteractionResponse, BuildError> {
    let response = match kind {
        ResponseKind::Message => CreateInteractionResponse::Message(data.build()?),
        ResponseKind::DeferredMessage => CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(data.ephemeral),
        ),
        ResponseKind::UpdateMessage => CreateInteractionResponse::UpdateMessage(data.build()?),
        ResponseKind::DeferredUpdate => CreateInteractionResponse::Acknowledge,
        ResponseKind::Pong => CreateInteractionResponse::Pong,
    };
    Ok(response)
}
