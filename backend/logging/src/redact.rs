//! Credential redaction.
//!
//! Scrubs Discord bot tokens and `Bot`/`Bearer` authorization values from
//! strings before they are logged or printed.

use once_cell::sync::Lazy;
use regex::Regex;

static BOT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_-]{23,28}\.[A-Za-z0-9_-]{6,7}\.[A-Za-z0-9_-]{27,}").unwrap()
});
static AUTH_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(Bot|Bearer)\s+[A-Za-z0-9\-\._~+/]+=*").unwrap());

pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = AUTH_HEADER_RE.replace_all(input, "$1 [REDACTED_TOKEN]");
    BOT_TOKEN_RE.replace_all(&redacted, "[REDACTED_TOKEN]").into_owned()
}

/// Show only the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
