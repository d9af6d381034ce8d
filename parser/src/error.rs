//! Error types for argument parsing and value dumps.

use paramkit_core::{Similarity, ValueError};
use thiserror::Error;

/// A declared parameter offered as a correction for an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub similarity: Similarity,
}

/// Problems found while walking the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// The value following a parameter was rejected.
    #[error("invalid value for parameter {name}: {source}")]
    InvalidValue {
        name: String,
        token: String,
        #[source]
        source: ValueError,
    },
    /// A parameter that needs a value was last on the command line.
    #[error("missing argument for parameter {name}")]
    MissingArgument { name: String },
    /// No parameter with this name is declared.
    #[error("invalid parameter: {name}")]
    UnknownParameter {
        name: String,
        /// Declared names similar to `name`, strongest first.
        suggestions: Vec<Suggestion>,
    },
    /// A token that is not switch-shaped and does not belong to a parameter.
    #[error("redundant argument: {0}")]
    RedundantArgument(String),
    /// Parsing finished with required parameters unset.
    #[error("missing required parameters: {}", .missing.join(", "))]
    IncompleteRequired { missing: Vec<String> },
}

impl ArgError {
    /// Names of the suggested parameters, for unknown-parameter errors.
    pub fn suggested_names(&self) -> Vec<&str> {
        match self {
            Self::UnknownParameter { suggestions, .. } => {
                suggestions.iter().map(|s| s.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Value dump failures.
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON serialization failure.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
