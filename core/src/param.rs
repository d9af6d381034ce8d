//! Declared parameters.

use std::cmp::Ordering;

use crate::similarity::{self, Similarity};
use crate::value::{IntBase, ParameterKind, ParameterValue};

/// A named, typed parameter.
///
/// Create one with a typed constructor, then chain builder methods. Equality
/// and ordering are by name only.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, Parameter, ParameterKind};
///
/// let param = Parameter::int("pdec", IntBase::Decimal)
///     .required()
///     .with_info("Sample decimal integer");
/// assert_eq!(param.name(), "pdec");
/// assert_eq!(param.kind(), ParameterKind::Int);
/// assert!(param.is_required());
/// assert!(param.requires_arg());
/// assert!(!param.is_set());
/// ```
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    required: bool,
    active: bool,
    info: String,
    extended_info: String,
    type_description: Option<String>,
    value: ParameterValue,
}

impl Parameter {
    /// Creates an optional, active parameter around `value`.
    pub fn new(name: &str, value: ParameterValue) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            active: true,
            info: String::new(),
            extended_info: String::new(),
            type_description: None,
            value,
        }
    }

    /// Creates an integer parameter.
    pub fn int(name: &str, base: IntBase) -> Self {
        Self::new(name, ParameterValue::int(base))
    }

    /// Creates a string parameter.
    pub fn string(name: &str) -> Self {
        Self::new(name, ParameterValue::string())
    }

    /// Creates a wide (UTF-16) string parameter.
    pub fn wide_string(name: &str) -> Self {
        Self::new(name, ParameterValue::wide_string())
    }

    /// Creates a boolean parameter.
    pub fn boolean(name: &str) -> Self {
        Self::new(name, ParameterValue::boolean())
    }

    /// Creates an enum parameter whose type is called `enum_name`.
    pub fn enumeration(name: &str, enum_name: &str) -> Self {
        Self::new(name, ParameterValue::enumeration(enum_name))
    }

    /// Creates a string list parameter.
    pub fn string_list(name: &str, delimiter: &str) -> Self {
        Self::new(name, ParameterValue::string_list(delimiter))
    }

    /// Creates an integer list parameter.
    pub fn int_list(name: &str, delimiter: &str) -> Self {
        Self::new(name, ParameterValue::int_list(delimiter))
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Marks the parameter as declared but inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Sets the short description.
    pub fn with_info(mut self, info: &str) -> Self {
        self.info = info.to_string();
        self
    }

    /// Sets the extended description.
    pub fn with_extended_info(mut self, info: &str) -> Self {
        self.extended_info = info.to_string();
        self
    }

    /// Overrides the type text shown after the name in help output.
    pub fn with_type_description(mut self, description: &str) -> Self {
        self.type_description = Some(description.to_string());
        self
    }

    /// Adds an enum option. Has no effect on other variants.
    pub fn with_option(mut self, value: i64, token: Option<&str>, info: &str) -> Self {
        self.value.add_option(value, token, info);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn extended_info(&self) -> &str {
        &self.extended_info
    }

    /// Replaces both descriptions.
    pub fn set_info(&mut self, info: &str, extended_info: &str) {
        self.info = info.to_string();
        self.extended_info = extended_info.to_string();
    }

    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut ParameterValue {
        &mut self.value
    }

    pub fn kind(&self) -> ParameterKind {
        self.value.kind()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_set()
    }

    pub fn requires_arg(&self) -> bool {
        self.value.requires_arg()
    }

    /// The type text shown in help: the override if one was given, else the
    /// variant's type name.
    pub fn type_description(&self) -> String {
        self.type_description
            .clone()
            .unwrap_or_else(|| self.value.type_name())
    }

    /// Returns the description, optionally followed by the extended
    /// description and (for enums) the list of options.
    pub fn description(&self, extended: bool) -> String {
        let mut out = self.info.clone();
        if !extended {
            return out;
        }
        let mut extra = self.extended_info.clone();
        if let Some(options) = self.value.options_info() {
            if !extra.is_empty() {
                extra.push('\n');
            }
            extra.push_str(&options);
        }
        if !extra.is_empty() {
            out.push('\n');
            out.push_str(&extra);
        }
        out
    }

    /// Compares the parameter name against a user-typed filter.
    pub fn name_similarity(&self, filter: &str) -> Similarity {
        similarity::is_similar(&self.name, filter)
    }

    /// Searches the descriptions, the type text and enum option descriptions
    /// for `keyword`, returning the strongest tier found.
    pub fn keyword_similarity(&self, keyword: &str) -> Similarity {
        let type_text = self.type_description();
        [self.info.as_str(), self.extended_info.as_str(), type_text.as_str()]
            .into_iter()
            .chain(self.value.searchable_texts())
            .map(|text| similarity::find_keyword(text, keyword))
            .max()
            .unwrap_or_default()
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Parameter {}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let param = Parameter::boolean("pbool").inactive().with_required(true);
        assert!(param.is_required());
        assert!(!param.is_active());
        assert!(!param.requires_arg());
    }

    #[test]
    fn test_ordering_is_by_name() {
        let a = Parameter::string("alpha");
        let b = Parameter::boolean("beta");
        assert!(a < b);
        assert_eq!(a, Parameter::int("alpha", IntBase::Any));
    }

    #[test]
    fn test_type_description_override() {
        let param = Parameter::string("path");
        assert_eq!(param.type_description(), "string");
        let param = param.with_type_description("file path");
        assert_eq!(param.type_description(), "file path");
    }

    #[test]
    fn test_extended_description_includes_enum_options() {
        let param = Parameter::enumeration("mode", "scan_mode")
            .with_info("Scan mode")
            .with_extended_info("Pick one.")
            .with_option(0, Some("A"), "all")
            .with_option(1, None, "only");
        assert_eq!(param.description(false), "Scan mode");
        assert_eq!(
            param.description(true),
            "Scan mode\nPick one.\n*scan_mode:\n\t0 (A) - all\n\t1 - only"
        );
    }

    #[test]
    fn test_keyword_search_covers_type_and_options() {
        let param = Parameter::enumeration("mode", "scan_mode")
            .with_info("How to scan")
            .with_option(0, Some("A"), "aggressive heuristics");
        assert_eq!(param.keyword_similarity("heuristics"), Similarity::Substring);
        assert_eq!(param.keyword_similarity("scan_mode"), Similarity::Substring);
        assert_eq!(param.keyword_similarity("zzz"), Similarity::None);

        let hex = Parameter::int("addr", IntBase::Hex);
        assert_eq!(hex.keyword_similarity("hex"), Similarity::Substring);
    }
}
