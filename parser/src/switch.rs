//! Switch grammar.
//!
//! A token is a switch when it starts with one of the configured switch
//! characters and is longer than that character. `/name` and `-name` strip one
//! character; a doubled secondary character (`--name`) strips both.

use crate::config::ParserConfig;

/// Returns `true` if `token` is switch-shaped.
///
/// # Examples
///
/// ```
/// use paramkit_parser::{ParserConfig, is_switch};
///
/// let config = ParserConfig::default();
/// assert!(is_switch(&config, "/pdec"));
/// assert!(is_switch(&config, "--pdec"));
/// assert!(!is_switch(&config, "-"));
/// assert!(!is_switch(&config, "42"));
/// ```
pub fn is_switch(config: &ParserConfig, token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => config.switch_chars().contains(&first) && chars.next().is_some(),
        None => false,
    }
}

/// Removes the switch prefix from `token`.
///
/// Tokens that do not start with a switch character are returned unchanged.
pub fn strip_prefix<'a>(config: &ParserConfig, token: &'a str) -> &'a str {
    let secondary = config.secondary_switch;
    if token.chars().count() > 2 {
        if let Some(rest) = token
            .strip_prefix(secondary)
            .and_then(|t| t.strip_prefix(secondary))
        {
            return rest;
        }
    }
    token
        .strip_prefix(&config.switch_chars()[..])
        .unwrap_or(token)
}
