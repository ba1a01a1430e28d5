//! Construction helpers for interaction payloads.
//!
//! Each `*Spec` type is a plain struct with named optional fields and a fluent
//! setter per field. `build()` turns it into the matching serenity builder,
//! validating the few constraints Discord enforces on component layout.

pub mod component;
pub mod embed;
pub mod response;

pub use component::{ActionRowSpec, OptionEmoji, RowComponent, SelectOptionSpec, MAX_BUTTONS_PER_ROW};
pub use embed::{EmbedFieldSpec, EmbedSpec};
pub use response::{new_interaction_response, ResponseData, ResponseKind};

pub use discordx_core::BuildError;
pub use serenity::all::ButtonStyle;
