//! Parse results.

use crate::error::ArgError;

/// How a parse run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was consumed and all active required parameters are set.
    Done,
    /// The user asked for help, optionally about a topic.
    HelpRequested { topic: Option<String> },
    /// The user asked for the version string.
    VersionRequested,
    /// The user asked for details of one parameter with `/name ?`.
    ParameterInfo { name: String },
    /// Parsing stopped on an error.
    Failed(ArgError),
}

impl Outcome {
    /// Returns the error of a failed run.
    pub fn error(&self) -> Option<&ArgError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of [`ArgumentParser::parse`](crate::ArgumentParser::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub outcome: Outcome,
    /// Non-fatal problems, such as redundant arguments, in command-line order.
    pub warnings: Vec<ArgError>,
    /// Number of parameters matched by name.
    pub matched: usize,
}

impl ParseReport {
    /// Returns `true` when the application may proceed with the parsed values.
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_done_is_success() {
        let mut report = ParseReport {
            outcome: Outcome::Done,
            warnings: vec![ArgError::RedundantArgument("x".to_string())],
            matched: 0,
        };
        assert!(report.is_success());
        assert!(report.outcome.error().is_none());

        report.outcome = Outcome::HelpRequested { topic: None };
        assert!(!report.is_success());

        report.outcome = Outcome::Failed(ArgError::MissingArgument {
            name: "pdec".to_string(),
        });
        assert!(!report.is_success());
        assert!(report.outcome.error().is_some());
    }
}
