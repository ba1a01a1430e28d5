//! Demo bot: the commands and components the `discordx` binary serves.

use anyhow::Result;
use discordx_builders::{
    new_interaction_response, ActionRowSpec, BuildError, ButtonStyle, EmbedFieldSpec, EmbedSpec,
    ResponseData, ResponseKind, SelectOptionSpec,
};
use discordx_commands::{handler_fn, CommandSettings, RegistryError, SlashCommand};
use discordx_core::DiscordxError;
use serenity::all::{
    CommandOptionType, ComponentInteractionDataKind, Context, CreateCommandOption,
    CreateInteractionResponse, Interaction,
};
use tracing::info;

pub const PING_AGAIN_ID: &str = "ping-again";
pub const POLL_VOTE_ID: &str = "poll-vote";

const BLURPLE: u32 = 0x5865f2;
const DOCS_URL: &str = "https://discord.com/developers/docs/interactions/receiving-and-responding";

/// Register every demo command and component into `settings`.
pub fn register_all(settings: &mut CommandSettings) -> Result<(), RegistryError> {
    settings.add_command(SlashCommand::new("ping", "Check that the bot is alive"), handler_fn(ping))?;
    settings.add_command(SlashCommand::new("pong", "Get a private ping back"), handler_fn(pong))?;
    settings.add_component(PING_AGAIN_ID, handler_fn(ping_again))?;

    let poll_cmd = SlashCommand::new("poll", "Ask the channel a yes/no question").option(
        CreateCommandOption::new(CommandOptionType::String, "question", "What to ask").required(true),
    );
    settings.add_command_with_component(poll_cmd, handler_fn(poll), POLL_VOTE_ID, handler_fn(vote))
}

async fn ping(ctx: Context, interaction: Interaction) -> Result<()> {
    let Interaction::Command(cmd) = interaction else { return Ok(()) };
    cmd.create_response(&ctx, ping_response()?).await?;
    Ok(())
}

async fn pong(ctx: Context, interaction: Interaction) -> Result<()> {
    let Interaction::Command(cmd) = interaction else { return Ok(()) };
    cmd.create_response(&ctx, pong_response(&cmd.user.name)?).await?;
    Ok(())
}

async fn ping_again(ctx: Context, interaction: Interaction) -> Result<()> {
    let Interaction::Component(cpn) = interaction else { return Ok(()) };
    let response = new_interaction_response(
        ResponseKind::UpdateMessage,
        ResponseData::new().content(format!("Pong again, {}!", cpn.user.name)),
    )?;
    cpn.create_response(&ctx, response).await?;
    Ok(())
}

async fn poll(ctx: Context, interaction: Interaction) -> Result<()> {
    let Interaction::Command(cmd) = interaction else { return Ok(()) };
    let question = cmd
        .data
        .options
        .iter()
        .find(|o| o.name == "question")
        .and_then(|o| o.value.as_str())
        .unwrap_or("Well?")
        .to_string();
    cmd.create_response(&ctx, poll_response(&question)?).await?;
    Ok(())
}

async fn vote(ctx: Context, interaction: Interaction) -> Result<()> {
    let Interaction::Component(cpn) = interaction else { return Ok(()) };
    let values = match &cpn.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.clone(),
        _ => Vec::new(),
    };
    info!(user = %cpn.user.name, ?values, "Poll vote");
    cpn.create_response(&ctx, vote_response(&values)?).await?;
    Ok(())
}

/// Build a registry holding the demo bot.
pub fn build_registry() -> Result<CommandSettings, DiscordxError> {
    let mut settings = CommandSettings::new();
    register_all(&mut settings)?;
    Ok(settings)
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn ping_data() -> ResponseData {
    ResponseData::new().content("Pong!").row(
        ActionRowSpec::new()
            .custom_button(ButtonStyle::Primary, "Again", PING_AGAIN_ID)
            .link_button("Docs", DOCS_URL),
    )
}

pub fn ping_response() -> Result<CreateInteractionResponse, BuildError> {
    new_interaction_response(ResponseKind::Message, ping_data())
}

pub fn pong_response(user: &str) -> Result<CreateInteractionResponse, BuildError> {
    let embed = EmbedSpec::new()
        .title("Ping!")
        .description(format!("Only you can see this, {user}."))
        .color(BLURPLE);
    new_interaction_response(ResponseKind::Message, ResponseData::new().embed(embed).ephemeral(true))
}

fn poll_data(question: &str) -> ResponseData {
    let options = vec![
        SelectOptionSpec::new("Yes", "yes").default_emoji("👍"),
        SelectOptionSpec::new("No", "no").default_emoji("👎"),
        SelectOptionSpec::new("Not sure", "unsure").description("Abstain"),
    ];
    ResponseData::new()
        .embed(
            EmbedSpec::new()
                .title(question)
                .color(BLURPLE)
                .field(EmbedFieldSpec::new("How to vote", "Pick an answer below").inline(true)),
        )
        .row(ActionRowSpec::new().single_select_menu(POLL_VOTE_ID, options))
}

pub fn poll_response(question: &str) -> Result<CreateInteractionResponse, BuildError> {
    new_interaction_response(ResponseKind::Message, poll_data(question))
}

pub fn vote_response(values: &[String]) -> Result<CreateInteractionResponse, BuildError> {
    let content = match values.first() {
        Some(choice) => format!("You voted **{choice}**."),
        None => "No answer selected.".to_string(),
    };
    new_interaction_response(ResponseKind::Message, ResponseData::new().content(content).ephemeral(true))
}
