//! Structured logging for discordx.
//!
//! Console output plus an optional rolling JSON file, and token redaction for
//! anything that might echo credentials.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::{mask_secret, redact_sensitive_data};
