/// Process-wide default registry.
///
/// A convenience for small bots that register everything from `main`. Bots
/// that want isolated registries (tests, several clients in one process)
/// should build their own [`CommandSettings`] instead.
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use discordx_core::{RegistryError, SharedHandler};
use once_cell::sync::Lazy;

use crate::registry::CommandSettings;
use crate::types::SlashCommand;

static DEFAULT_SETTINGS: Lazy<RwLock<CommandSettings>> =
    Lazy::new(|| RwLock::new(CommandSettings::new()));

// Every mutation checks before it inserts, so a panic while the lock was
// held cannot leave half a registration behind.
fn write() -> RwLockWriteGuard<'static, CommandSettings> {
    DEFAULT_SETTINGS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Read access to the default registry.
pub fn default_settings() -> RwLockReadGuard<'static, CommandSettings> {
    DEFAULT_SETTINGS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Owned copy of the default registry, for handing to the gateway adapter.
pub fn snapshot() -> CommandSettings {
    default_settings().clone()
}

pub fn add_command(command: SlashCommand, handler: SharedHandler) -> Result<(), RegistryError> {
    write().add_command(command, handler)
}

pub fn add_component(
    custom_id: impl Into<String>,
    handler: SharedHandler,
) -> Result<(), RegistryError> {
    write().add_component(custom_id, handler)
}

pub fn add_command_with_component(
    command: SlashCommand,
    command_handler: SharedHandler,
    custom_id: impl Into<String>,
    component_handler: SharedHandler,
) -> Result<(), RegistryError> {
    write().add_command_with_component(command, command_handler, custom_id, component_handler)
}
