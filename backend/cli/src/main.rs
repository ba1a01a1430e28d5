mod bot;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use discordx_channels::{DiscordAdapter, Publication};
use discordx_config::{
    config_dir, config_file_path, enforce, load_and_prepare, CommandScope, DiscordxConfig,
    ValidationReport,
};
use discordx_logging::{init_logger, mask_secret, redact_sensitive_data};

#[derive(Parser)]
#[command(name = "discordx")]
#[command(about = "discordx: Discord bot on a command/component registry")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.discordx/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and serve the registered commands
    Run {
        /// Publish commands to this guild instead of the configured scope
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        guild: Option<u64>,
        /// Do not upload commands on ready
        #[arg(long)]
        no_publish: bool,
    },
    /// Print the command manifest that would be published
    Commands,
    /// Load and validate the config file
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| config_file_path(&config_dir()));

    match cli.command {
        Commands::Run { guild, no_publish } => run(&config_path, guild, no_publish).await,
        Commands::Commands => print_manifest(),
        Commands::CheckConfig => check_config(&config_path).await,
    }
}

async fn run(config_path: &Path, guild: Option<u64>, no_publish: bool) -> Result<()> {
    let (config, report) = load_and_prepare(config_path).await?;
    init_logger(
        config.logging.level.as_deref().unwrap_or("info"),
        config.logging.dir.as_deref(),
    );
    enforce(&report, config_path)?;

    // A duplicate name is a bug in the bot's setup: stop before connecting.
    let settings = bot::build_registry().context("Command registration failed")?;
    info!(
        commands = ?settings.command_names(),
        components = ?settings.component_ids(),
        "Registry ready"
    );

    let publication = resolve_publication(&config, guild, no_publish);
    let token = config.discord.token.clone().unwrap_or_default();
    info!(token = %mask_secret(&token), scope = ?publication, "Starting bot");

    DiscordAdapter::new(token, Arc::new(settings), publication).start().await?;
    Ok(())
}

fn resolve_publication(config: &DiscordxConfig, guild: Option<u64>, no_publish: bool) -> Publication {
    if no_publish || config.discord.publish_commands == Some(false) {
        return Publication::Skip;
    }
    if let Some(id) = guild {
        return Publication::Guild(id);
    }
    match config.discord.command_scope() {
        CommandScope::Global => Publication::Global,
        CommandScope::Guild(id) => Publication::Guild(id),
    }
}

fn print_manifest() -> Result<()> {
    let settings = bot::build_registry().context("Command registration failed")?;
    let manifest = settings
        .commands()
        .iter()
        .map(|c| c.manifest())
        .collect::<serde_json::Result<Vec<_>>>()?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

async fn check_config(config_path: &Path) -> Result<()> {
    init_logger("warn", None);
    let (config, report) = load_and_prepare(config_path).await?;

    print!("{}", render_checked_config(config, &report)?);
    if !report.is_valid() {
        bail!("{} is invalid", config_path.display());
    }
    println!("{} is valid", config_path.display());
    Ok(())
}

/// Config and findings as printed by `check-config`, with secrets hidden.
fn render_checked_config(mut config: DiscordxConfig, report: &ValidationReport) -> Result<String> {
    if let Some(token) = config.discord.token.as_mut() {
        *token = mask_secret(token);
    }
    let mut out = serde_json::to_string_pretty(&config)?;
    out.push('\n');
    for warning in &report.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }
    for error in &report.errors {
        out.push_str(&format!("error: {error}\n"));
    }
    Ok(redact_sensitive_data(&out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discordx_config::validate;

    const TOKEN: &str = "MTA4NjQ1MjQ1MjQ1MjQ1MjQ1Mg.GaBcDe.abcdefghijklmnopqrstuvwxyz0123";

    fn config(guild: Option<u64>, publish: Option<bool>) -> DiscordxConfig {
        let mut config = DiscordxConfig::default();
        config.discord.guild_id = guild;
        config.discord.publish_commands = publish;
        config
    }

    #[test]
    fn publication_follows_config_scope() {
        assert_eq!(resolve_publication(&config(None, Some(true)), None, false), Publication::Global);
        assert_eq!(
            resolve_publication(&config(Some(7), Some(true)), None, false),
            Publication::Guild(7)
        );
    }

    #[test]
    fn flags_override_config() {
        assert_eq!(
            resolve_publication(&config(Some(7), Some(true)), Some(9), false),
            Publication::Guild(9)
        );
        assert_eq!(resolve_publication(&config(None, Some(true)), Some(9), true), Publication::Skip);
        assert_eq!(resolve_publication(&config(None, Some(false)), None, false), Publication::Skip);
    }

    #[test]
    fn guild_zero_is_rejected_on_the_command_line() {
        assert!(Cli::try_parse_from(["discordx", "run", "--guild", "0"]).is_err());

        let cli = Cli::try_parse_from(["discordx", "run", "--guild", "42"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { guild: Some(42), no_publish: false }));
    }

    #[test]
    fn checked_config_never_shows_the_token() {
        let mut config = config(None, Some(true));
        config.discord.token = Some(TOKEN.into());
        // A token pasted into the wrong field is echoed by the level warning.
        config.logging.level = Some(TOKEN.into());
        let report = validate(&config);
        assert_eq!(report.warnings.len(), 1);

        let out = render_checked_config(config, &report).unwrap();
        assert!(!out.contains(TOKEN), "{out}");
        assert!(out.contains("****0123"));
        assert!(out.contains("warning: "));
    }
}
