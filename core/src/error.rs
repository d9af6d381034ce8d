//! Error types for parameter declaration and value parsing.

use thiserror::Error;

/// Errors raised while declaring parameters and groups.
///
/// A failed declaration leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// A parameter with the same name is already registered.
    #[error("duplicate parameter: {0}")]
    DuplicateParameter(String),
    /// A group with the same name is already registered.
    #[error("duplicate group: {0}")]
    DuplicateGroup(String),
}

/// Errors raised when a token fails a variant's validation.
///
/// The parameter keeps its previous value whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The token is not a valid representation for the variant.
    #[error("invalid value `{token}`, expected {expected}")]
    Invalid {
        /// The rejected token.
        token: String,
        /// Human-readable description of the accepted type.
        expected: String,
    },
    /// The token names a value outside the enum's domain.
    #[error("value `{token}` is not an option of {enum_name}")]
    OutOfDomain {
        /// The rejected token.
        token: String,
        /// Name of the enum type.
        enum_name: String,
    },
    /// One element of a numeric list is not a number.
    #[error("list element `{element}` is not a number")]
    InvalidListElement {
        /// The offending element, trimmed.
        element: String,
    },
    /// Splitting the token produced no elements.
    #[error("list `{token}` has no elements")]
    EmptyList {
        /// The rejected token.
        token: String,
    },
    /// A zero-argument parse was attempted on a variant that needs a value.
    #[error("a value is required")]
    MissingValue,
}

/// Convenience alias for value parsing results.
pub type ValueResult = std::result::Result<(), ValueError>;
