//! Declaration validation.
//!
//! Catches declarations that register fine but cannot be used from the
//! command line: empty names, names that look like switches or contain
//! whitespace, names shadowed by reserved keywords, enums with no options
//! and lists with no delimiter.
//!
//! # Examples
//!
//! ```
//! use paramkit_core::*;
//!
//! let mut registry = ParameterRegistry::new();
//! registry.register(Parameter::boolean("verbose")).unwrap();
//! assert!(validate_registry(&registry, &["help", "?"], &['/', '-']).is_empty());
//!
//! // Shadowed by the help keyword
//! registry.register(Parameter::boolean("help")).unwrap();
//! let errors = validate_registry(&registry, &["help", "?"], &['/', '-']);
//! assert_eq!(errors, vec![ValidationError::ReservedName("help".to_string())]);
//! ```

use thiserror::Error;

use crate::param::Parameter;
use crate::registry::ParameterRegistry;
use crate::value::ParameterValue;

/// Declaration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Parameter name is empty or whitespace-only.
    #[error("parameter name cannot be empty")]
    EmptyName,
    /// Name contains whitespace or starts with a switch character.
    #[error("invalid parameter name: {0}")]
    InvalidName(String),
    /// Name collides with a reserved keyword such as `help`.
    #[error("parameter name is reserved: {0}")]
    ReservedName(String),
    /// Enum parameter has no options, so no value can ever be accepted.
    #[error("enum parameter has no options: {0}")]
    EmptyEnumDomain(String),
    /// List parameter has an empty delimiter.
    #[error("list parameter has an empty delimiter: {0}")]
    EmptyDelimiter(String),
}

/// Validates every declared parameter, in name order.
///
/// `reserved` lists keywords the parser intercepts before name lookup and
/// `switch_chars` the characters that mark a token as a switch.
pub fn validate_registry(
    registry: &ParameterRegistry,
    reserved: &[&str],
    switch_chars: &[char],
) -> Vec<ValidationError> {
    registry
        .iter()
        .filter_map(|param| validate_parameter(param, reserved, switch_chars))
        .collect()
}

/// Validates one parameter, reporting the first problem found.
pub fn validate_parameter(
    param: &Parameter,
    reserved: &[&str],
    switch_chars: &[char],
) -> Option<ValidationError> {
    let name = param.name();
    if name.trim().is_empty() {
        return Some(ValidationError::EmptyName);
    }
    if name.chars().any(char::is_whitespace) || name.starts_with(switch_chars) {
        return Some(ValidationError::InvalidName(name.to_string()));
    }
    if reserved.contains(&name) {
        return Some(ValidationError::ReservedName(name.to_string()));
    }

    match param.value() {
        ParameterValue::Enum { options, .. } if options.is_empty() => {
            Some(ValidationError::EmptyEnumDomain(name.to_string()))
        }
        ParameterValue::StringList { delimiter, .. } | ParameterValue::IntList { delimiter, .. }
            if delimiter.is_empty() =>
        {
            Some(ValidationError::EmptyDelimiter(name.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntBase;

    #[test]
    fn test_validate_rejects_switch_shaped_names() {
        let param = Parameter::boolean("-v");
        assert_eq!(
            validate_parameter(&param, &[], &['/', '-']),
            Some(ValidationError::InvalidName("-v".to_string()))
        );
        let param = Parameter::boolean("out file");
        assert!(matches!(
            validate_parameter(&param, &[], &['/', '-']),
            Some(ValidationError::InvalidName(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let param = Parameter::string(" ");
        assert_eq!(validate_parameter(&param, &[], &['/', '-']), Some(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_empty_enum_and_delimiter() {
        let param = Parameter::enumeration("mode", "scan_mode");
        assert_eq!(
            validate_parameter(&param, &[], &['/', '-']),
            Some(ValidationError::EmptyEnumDomain("mode".to_string()))
        );
        let param = Parameter::int_list("ids", "");
        assert_eq!(
            validate_parameter(&param, &[], &['/', '-']),
            Some(ValidationError::EmptyDelimiter("ids".to_string()))
        );
    }

    #[test]
    fn test_validate_accepts_valid_registry() {
        let mut registry = ParameterRegistry::new();
        registry
            .register(Parameter::int("pdec", IntBase::Decimal).required())
            .unwrap();
        registry
            .register(Parameter::enumeration("mode", "scan_mode").with_option(0, None, "all"))
            .unwrap();
        registry.register(Parameter::string_list("names", ",")).unwrap();
        assert!(validate_registry(&registry, &["help", "?", "version", "ver"], &['/', '-']).is_empty());
    }
}
