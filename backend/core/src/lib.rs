pub mod error;
pub mod handler;

pub use error::{BuildError, DiscordxError, RegistryError};
pub use handler::{handler_fn, FnHandler, InteractionHandler, SharedHandler};
