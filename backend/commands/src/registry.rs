/// Command and component registry.
///
/// Holds the ordered list of command descriptors to publish and the two
/// name → handler tables used when interactions arrive. Keys are unique and
/// permanent: there is no way to replace or remove a binding once added.
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use discordx_core::{RegistryError, SharedHandler};
use tracing::{debug, warn};

use crate::dispatch::InteractionKey;
use crate::types::{NamedCommand, SlashCommand};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Registry of commands and component handlers.
///
/// Populate it on a single thread during start-up, then share it read-only
/// (for example behind an `Arc`) with the gateway adapter.
#[derive(Clone)]
pub struct CommandSettings<C = SlashCommand, H = SharedHandler> {
    commands: Vec<C>,
    command_handlers: HashMap<String, H>,
    component_handlers: HashMap<String, H>,
}

impl<C, H> CommandSettings<C, H> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            command_handlers: HashMap::new(),
            component_handlers: HashMap::new(),
        }
    }

    /// Command descriptors in registration order.
    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    pub fn command_handler(&self, name: &str) -> Option<&H> {
        self.command_handlers.get(name)
    }

    pub fn component_handler(&self, custom_id: &str) -> Option<&H> {
        self.component_handlers.get(custom_id)
    }

    pub fn resolve(&self, key: &InteractionKey) -> Option<&H> {
        match key {
            InteractionKey::Command(name) => self.command_handler(name),
            InteractionKey::Component(custom_id) => self.component_handler(custom_id),
        }
    }

    /// Registered component ids, sorted.
    pub fn component_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.component_handlers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no command is registered; components are not counted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Register a component handler under `custom_id`.
    pub fn add_component(
        &mut self,
        custom_id: impl Into<String>,
        handler: H,
    ) -> Result<(), RegistryError> {
        match self.component_handlers.entry(custom_id.into()) {
            Entry::Occupied(slot) => {
                warn!(custom_id = %slot.key(), "Duplicate component custom id");
                Err(RegistryError::DuplicateComponent(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                debug!(custom_id = %slot.key(), "Registered component");
                slot.insert(handler);
                Ok(())
            }
        }
    }
}

impl<C: NamedCommand, H> CommandSettings<C, H> {
    /// Command names in registration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Register a command descriptor and its handler.
    ///
    /// The descriptor is appended to [`commands`](Self::commands), so
    /// publication order follows call order.
    pub fn add_command(&mut self, command: C, handler: H) -> Result<(), RegistryError> {
        self.ensure_command_free(command.name())?;
        let name = command.name().to_string();
        debug!(command = %name, "Registered command");
        self.command_handlers.insert(name, handler);
        self.commands.push(command);
        Ok(())
    }

    /// Register a command together with the component its response carries.
    ///
    /// Behaves like [`add_component`](Self::add_component) followed by
    /// [`add_command`](Self::add_command), except both keys are checked
    /// before anything is stored: on error the registry is unchanged.
    pub fn add_command_with_component(
        &mut self,
        command: C,
        command_handler: H,
        custom_id: impl Into<String>,
        component_handler: H,
    ) -> Result<(), RegistryError> {
        let custom_id = custom_id.into();
        if self.component_handlers.contains_key(&custom_id) {
            warn!(custom_id = %custom_id, "Duplicate component custom id");
            return Err(RegistryError::DuplicateComponent(custom_id));
        }
        self.ensure_command_free(command.name())?;

        self.add_component(custom_id, component_handler)?;
        self.add_command(command, command_handler)
    }

    fn ensure_command_free(&self, name: &str) -> Result<(), RegistryError> {
        if self.command_handlers.contains_key(name) {
            warn!(command = %name, "Duplicate command name");
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }
        Ok(())
    }
}

impl<C, H> Default for CommandSettings<C, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: NamedCommand, H> std::fmt::Debug for CommandSettings<C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSettings")
            .field("commands", &self.command_names())
            .field("components", &self.component_ids())
            .finish()
    }
}
