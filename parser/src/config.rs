//! Parser configuration.
//!
//! Controls the switch grammar, the reserved help and version keywords, and
//! the optional banner and version strings shown by help output.
//!
//! # Example YAML
//!
//! ```yaml
//! primary_switch: "/"
//! secondary_switch: "-"
//! help_keyword: help
//! help_shorthand: "?"
//! version_keywords: [version, ver]
//! version: "1.2.0"
//! banner: "demo tool"
//! lint_declarations: true
//! ```

use serde::{Deserialize, Serialize};

/// Settings for [`ArgumentParser`](crate::ArgumentParser).
///
/// Every field has a default, so a partial YAML or JSON document is enough.
///
/// # Examples
///
/// ```
/// use paramkit_parser::ParserConfig;
///
/// let config: ParserConfig = serde_yaml::from_str("version: \"1.0\"").unwrap();
/// assert_eq!(config.version.as_deref(), Some("1.0"));
/// assert_eq!(config.primary_switch, '/');
/// assert!(config.is_version_keyword("ver"));
///
/// // Without a version string the version keywords are ordinary names.
/// assert!(!ParserConfig::default().is_version_keyword("ver"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Switch character used when printing parameter names.
    pub primary_switch: char,
    /// Alternative switch character; doubling it (`--`) also marks a switch.
    pub secondary_switch: char,
    /// Long help keyword, which may be followed by a topic.
    pub help_keyword: String,
    /// Short help keyword, which prints the brief listing.
    pub help_shorthand: String,
    /// Keywords that print the version string.
    pub version_keywords: Vec<String>,
    /// Application version. The version keywords are only reserved when set.
    pub version: Option<String>,
    /// Text printed before the full help listing.
    pub banner: Option<String>,
    /// Validate declarations before parsing and log the findings.
    pub lint_declarations: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            primary_switch: '/',
            secondary_switch: '-',
            help_keyword: "help".to_string(),
            help_shorthand: "?".to_string(),
            version_keywords: vec!["version".to_string(), "ver".to_string()],
            version: None,
            banner: None,
            lint_declarations: true,
        }
    }
}

impl ParserConfig {
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string()).filter(|v| !v.is_empty());
        self
    }

    pub fn with_banner(mut self, banner: &str) -> Self {
        self.banner = Some(banner.to_string()).filter(|b| !b.is_empty());
        self
    }

    pub fn with_switches(mut self, primary: char, secondary: char) -> Self {
        self.primary_switch = primary;
        self.secondary_switch = secondary;
        self
    }

    /// Returns `true` for either help keyword.
    pub fn is_help_keyword(&self, name: &str) -> bool {
        name == self.help_keyword || name == self.help_shorthand
    }

    /// Returns `true` if `name` is a version keyword and a version is set.
    pub fn is_version_keyword(&self, name: &str) -> bool {
        self.version.is_some() && self.version_keywords.iter().any(|k| k == name)
    }

    /// Keywords intercepted before parameter lookup.
    pub fn reserved_keywords(&self) -> Vec<&str> {
        let mut reserved = vec![self.help_keyword.as_str(), self.help_shorthand.as_str()];
        if self.version.is_some() {
            reserved.extend(self.version_keywords.iter().map(String::as_str));
        }
        reserved
    }

    /// Both switch characters.
    pub fn switch_chars(&self) -> [char; 2] {
        [self.primary_switch, self.secondary_switch]
    }
}
