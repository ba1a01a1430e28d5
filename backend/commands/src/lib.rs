pub mod default;
pub mod dispatch;
pub mod registry;
pub mod types;

pub use default::{add_command, add_command_with_component, add_component, default_settings, snapshot};
pub use dispatch::{dispatch, route, DispatchOutcome, InteractionKey, Route};
pub use registry::CommandSettings;
pub use types::{NamedCommand, SlashCommand};

pub use discordx_core::{handler_fn, InteractionHandler, RegistryError, SharedHandler};
