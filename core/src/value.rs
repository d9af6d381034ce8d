//! Typed value cells, one per parameter.
//!
//! [`ParameterValue`] is a closed sum type: each variant carries its own value
//! and validation state, and every operation dispatches by pattern match.
//! Parsing is transactional: a failed [`parse`](ParameterValue::parse) leaves
//! the previous value untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValueError, ValueResult};
use crate::numeric;

/// Numeric base accepted by an integer parameter.
///
/// The base controls both the accepted text and the display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntBase {
    /// Decimal, or hexadecimal with a `0x` prefix (detected from the prefix).
    #[default]
    Any,
    /// Decimal digits only.
    Decimal,
    /// Hex digits, with or without a `0x` prefix.
    Hex,
}

/// Type tag of a parameter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Int,
    String,
    WideString,
    Bool,
    Enum,
    StringList,
    IntList,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::String => write!(f, "string"),
            Self::WideString => write!(f, "wide_string"),
            Self::Bool => write!(f, "bool"),
            Self::Enum => write!(f, "enum"),
            Self::StringList => write!(f, "string_list"),
            Self::IntList => write!(f, "int_list"),
        }
    }
}

/// One entry of an enum domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOption {
    /// Optional short token accepted in place of the integer.
    pub token: Option<String>,
    /// Description of the option.
    pub info: String,
}

/// The value slot of a parameter.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, ParameterValue};
///
/// let mut dec = ParameterValue::int(IntBase::Decimal);
/// assert!(dec.parse("123abc").is_err());
/// assert!(!dec.is_set());
///
/// let mut any = ParameterValue::int(IntBase::Any);
/// any.parse("0x1F").unwrap();
/// assert_eq!(any.as_int(), Some(31));
/// assert_eq!(any.to_string(), "0x1f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Unsigned 64-bit integer.
    Int {
        base: IntBase,
        value: Option<u64>,
        /// Whether the last accepted text was hexadecimal.
        hex: bool,
    },
    /// UTF-8 text; unset while empty.
    String(String),
    /// UTF-16 text; unset while empty.
    WideString(Vec<u16>),
    /// Boolean with an explicit "was parsed" flag.
    Bool { value: bool, parsed: bool },
    /// Integer restricted to an injected domain.
    Enum {
        name: String,
        options: BTreeMap<i64, EnumOption>,
        value: Option<i64>,
    },
    /// Delimited list of strings.
    StringList { raw: String, delimiter: String },
    /// Delimited list of integers.
    IntList { raw: String, delimiter: String },
}

impl ParameterValue {
    /// Creates an unset integer value.
    pub fn int(base: IntBase) -> Self {
        Self::Int {
            base,
            value: None,
            hex: false,
        }
    }

    /// Creates an unset string value.
    pub fn string() -> Self {
        Self::String(String::new())
    }

    /// Creates an unset wide string value.
    pub fn wide_string() -> Self {
        Self::WideString(Vec::new())
    }

    /// Creates an unset boolean value.
    pub fn boolean() -> Self {
        Self::Bool {
            value: false,
            parsed: false,
        }
    }

    /// Creates an unset enum value with an empty domain named `name`.
    ///
    /// Add the domain with [`with_option`](Self::with_option).
    pub fn enumeration(name: &str) -> Self {
        Self::Enum {
            name: name.to_string(),
            options: BTreeMap::new(),
            value: None,
        }
    }

    /// Creates an unset string list split on `delimiter`.
    pub fn string_list(delimiter: &str) -> Self {
        Self::StringList {
            raw: String::new(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Creates an unset integer list split on `delimiter`.
    pub fn int_list(delimiter: &str) -> Self {
        Self::IntList {
            raw: String::new(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Adds an option to an enum domain. Has no effect on other variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramkit_core::ParameterValue;
    ///
    /// let mut mode = ParameterValue::enumeration("mode")
    ///     .with_option(0, Some("A"), "automatic")
    ///     .with_option(1, Some("O"), "other");
    /// mode.parse("O").unwrap();
    /// assert_eq!(mode.as_enum(), Some(1));
    /// assert!(mode.parse("2").is_err());
    /// ```
    pub fn with_option(mut self, value: i64, token: Option<&str>, info: &str) -> Self {
        self.add_option(value, token, info);
        self
    }

    /// Adds an option to an enum domain, replacing an existing entry with the
    /// same value. Returns `false` if this is not an enum.
    pub fn add_option(&mut self, value: i64, token: Option<&str>, info: &str) -> bool {
        let Self::Enum { options, .. } = self else {
            return false;
        };
        options.insert(
            value,
            EnumOption {
                token: token.map(String::from),
                info: info.to_string(),
            },
        );
        true
    }

    /// Returns the variant's type tag.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Int { .. } => ParameterKind::Int,
            Self::String(_) => ParameterKind::String,
            Self::WideString(_) => ParameterKind::WideString,
            Self::Bool { .. } => ParameterKind::Bool,
            Self::Enum { .. } => ParameterKind::Enum,
            Self::StringList { .. } => ParameterKind::StringList,
            Self::IntList { .. } => ParameterKind::IntList,
        }
    }

    /// Returns `true` if the variant cannot be parsed without a value.
    ///
    /// Only booleans may appear as a bare switch.
    pub fn requires_arg(&self) -> bool {
        !matches!(self, Self::Bool { .. })
    }

    /// Returns `true` if the value was filled.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Int { value, .. } => value.is_some(),
            Self::String(value) => !value.is_empty(),
            Self::WideString(value) => !value.is_empty(),
            Self::Bool { parsed, .. } => *parsed,
            Self::Enum { options, value, .. } => value.is_some_and(|v| options.contains_key(&v)),
            Self::StringList { raw, .. } | Self::IntList { raw, .. } => !raw.is_empty(),
        }
    }

    /// Returns a short description of the accepted values.
    pub fn type_name(&self) -> String {
        match self {
            Self::Int { base, .. } => int_type_name(*base).to_string(),
            Self::String(_) => "string".to_string(),
            Self::WideString(_) => "wstring".to_string(),
            Self::Bool { .. } => "bool".to_string(),
            Self::Enum { name, .. } => format!("*{name}"),
            Self::StringList { delimiter, .. } => format!("list: separated by '{delimiter}'"),
            Self::IntList { delimiter, .. } => {
                format!("list: dec or hex, separated by '{delimiter}'")
            }
        }
    }

    /// Parses `token` into the value.
    ///
    /// On failure the previous value (and set state) is kept.
    pub fn parse(&mut self, token: &str) -> ValueResult {
        match self {
            Self::Int { base, value, hex } => {
                let parsed = match base {
                    IntBase::Decimal => numeric::parse_dec_u64(token).map(|v| (v, false)),
                    IntBase::Hex => numeric::parse_hex_u64(token).map(|v| (v, true)),
                    IntBase::Any if numeric::is_hex_with_prefix(token) => {
                        numeric::parse_hex_u64(token).map(|v| (v, true))
                    }
                    IntBase::Any => numeric::parse_dec_u64(token).map(|v| (v, false)),
                };
                let Some((number, is_hex)) = parsed else {
                    return Err(invalid(token, int_type_name(*base)));
                };
                *value = Some(number);
                *hex = is_hex;
                Ok(())
            }
            Self::String(value) => {
                *value = token.to_string();
                Ok(())
            }
            Self::WideString(value) => {
                *value = token.encode_utf16().collect();
                Ok(())
            }
            Self::Bool { value, parsed } => {
                let Some(flag) = numeric::parse_bool(token) else {
                    return Err(invalid(token, "bool"));
                };
                *value = flag;
                *parsed = true;
                Ok(())
            }
            Self::Enum {
                name,
                options,
                value,
            } => {
                let by_token = options
                    .iter()
                    .find(|(_, option)| option.token.as_deref() == Some(token))
                    .map(|(key, _)| *key);
                if let Some(key) = by_token {
                    *value = Some(key);
                    return Ok(());
                }
                let Some(number) = numeric::parse_number(token) else {
                    return Err(invalid(token, &format!("*{name}")));
                };
                if !options.contains_key(&number) {
                    return Err(ValueError::OutOfDomain {
                        token: token.to_string(),
                        enum_name: name.clone(),
                    });
                }
                *value = Some(number);
                Ok(())
            }
            Self::StringList { raw, delimiter } => {
                if numeric::split_list(token, delimiter).is_empty() {
                    return Err(ValueError::EmptyList {
                        token: token.to_string(),
                    });
                }
                *raw = token.to_string();
                Ok(())
            }
            Self::IntList { raw, delimiter } => {
                let elements = numeric::split_list(token, delimiter);
                if elements.is_empty() {
                    return Err(ValueError::EmptyList {
                        token: token.to_string(),
                    });
                }
                if let Some(bad) = elements
                    .iter()
                    .find(|element| numeric::parse_number(element).is_none())
                {
                    return Err(ValueError::InvalidListElement {
                        element: bad.clone(),
                    });
                }
                *raw = token.to_string();
                Ok(())
            }
        }
    }

    /// Parses UTF-16 input. Wide strings store it as-is; other variants parse
    /// its lossy UTF-8 conversion.
    pub fn parse_wide(&mut self, token: &[u16]) -> ValueResult {
        if let Self::WideString(value) = self {
            *value = token.to_vec();
            return Ok(());
        }
        self.parse(&String::from_utf16_lossy(token))
    }

    /// Zero-argument parse: a bare boolean switch sets the value to `true`.
    ///
    /// Fails with [`ValueError::MissingValue`] on every other variant.
    pub fn parse_flag(&mut self) -> ValueResult {
        match self {
            Self::Bool { value, parsed } => {
                *value = true;
                *parsed = true;
                Ok(())
            }
            _ => Err(ValueError::MissingValue),
        }
    }

    /// Overwrites an integer value directly. Returns `false` for other variants.
    pub fn set_int(&mut self, number: u64) -> bool {
        let Self::Int { base, value, hex } = self else {
            return false;
        };
        *value = Some(number);
        *hex = *base == IntBase::Hex;
        true
    }

    /// Returns the integer, if this is a set integer.
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int { value, .. } => *value,
            _ => None,
        }
    }

    /// Returns the boolean, if this is a parsed boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool {
                value,
                parsed: true,
            } => Some(*value),
            _ => None,
        }
    }

    /// Returns the text of a set string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Returns the UTF-16 units of a set wide string value.
    pub fn as_wide(&self) -> Option<&[u16]> {
        match self {
            Self::WideString(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Returns the enum value, if it is set and inside the domain.
    pub fn as_enum(&self) -> Option<i64> {
        match self {
            Self::Enum { options, value, .. } => value.filter(|v| options.contains_key(v)),
            _ => None,
        }
    }

    /// Returns the deduplicated, trimmed elements of a set string list.
    pub fn string_elements(&self) -> Option<BTreeSet<String>> {
        match self {
            Self::StringList { raw, delimiter } if !raw.is_empty() => {
                Some(numeric::split_list(raw, delimiter))
            }
            _ => None,
        }
    }

    /// Returns the deduplicated integers of a set integer list.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramkit_core::ParameterValue;
    ///
    /// let mut list = ParameterValue::int_list(",");
    /// assert!(list.parse("3, 5,5,x").is_err());
    /// assert_eq!(list.int_elements(), None);
    ///
    /// list.parse("3, 5,5,0x10").unwrap();
    /// let items: Vec<i64> = list.int_elements().unwrap().into_iter().collect();
    /// assert_eq!(items, vec![3, 5, 16]);
    /// ```
    pub fn int_elements(&self) -> Option<BTreeSet<i64>> {
        match self {
            Self::IntList { raw, delimiter } if !raw.is_empty() => Some(
                numeric::split_list(raw, delimiter)
                    .iter()
                    .filter_map(|element| numeric::parse_number(element))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Lists the enum domain as `value (token) - info` lines under the type
    /// name. Returns `None` for other variants.
    pub fn options_info(&self) -> Option<String> {
        let Self::Enum { options, .. } = self else {
            return None;
        };
        let mut out = format!("{}:", self.type_name());
        for (value, option) in options {
            out.push_str(&format!("\n\t{value}"));
            if let Some(token) = &option.token {
                out.push_str(&format!(" ({token})"));
            }
            out.push_str(&format!(" - {}", option.info));
        }
        Some(out)
    }

    /// Texts besides the parameter's own descriptions that keyword search
    /// should look at: the enum type name and the option descriptions.
    pub fn searchable_texts(&self) -> Vec<&str> {
        match self {
            Self::Enum { name, options, .. } => std::iter::once(name.as_str())
                .chain(options.values().map(|option| option.info.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int { value: None, .. } => write!(f, "(undefined)"),
            Self::Int {
                base,
                value: Some(value),
                hex,
            } => {
                if *base == IntBase::Hex || (*base == IntBase::Any && *hex) {
                    write!(f, "{value:#x}")
                } else {
                    write!(f, "{value}")
                }
            }
            Self::String(value) => write!(f, "\"{value}\""),
            Self::WideString(value) => write!(f, "\"{}\"", String::from_utf16_lossy(value)),
            Self::Bool { value, .. } => write!(f, "{value}"),
            Self::Enum { options, value, .. } => {
                match value.and_then(|v| options.get(&v).map(|option| (v, option))) {
                    None => write!(f, "(undefined)"),
                    Some((_, EnumOption { token: Some(token), .. })) => write!(f, "{token}"),
                    Some((v, _)) => write!(f, "{v}"),
                }
            }
            Self::StringList { raw, .. } | Self::IntList { raw, .. } => write!(f, "\"{raw}\""),
        }
    }
}

fn int_type_name(base: IntBase) -> &'static str {
    match base {
        IntBase::Hex => "integer: hex",
        IntBase::Decimal => "integer: dec",
        IntBase::Any => "integer: decimal, or hexadecimal with '0x' prefix",
    }
}

fn invalid(token: &str, expected: &str) -> ValueError {
    ValueError::Invalid {
        token: token.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enum() -> ParameterValue {
        ParameterValue::enumeration("mode")
            .with_option(0, Some("A"), "all")
            .with_option(1, Some("O"), "only")
            .with_option(7, None, "seventh")
    }

    #[test]
    fn test_decimal_int_rejects_mixed_text_and_keeps_value() {
        let mut value = ParameterValue::int(IntBase::Decimal);
        assert!(value.parse("123abc").is_err());
        assert!(!value.is_set());

        value.parse("42").unwrap();
        assert!(value.parse("0x10").is_err());
        assert_eq!(value.as_int(), Some(42));
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn test_hex_int_accepts_bare_and_prefixed() {
        let mut value = ParameterValue::int(IntBase::Hex);
        value.parse("ff").unwrap();
        assert_eq!(value.as_int(), Some(255));
        value.parse("0X10").unwrap();
        assert_eq!(value.as_int(), Some(16));
        assert_eq!(value.to_string(), "0x10");
        assert!(value.parse("xyz").is_err());
    }

    #[test]
    fn test_any_int_detects_base_from_prefix() {
        let mut value = ParameterValue::int(IntBase::Any);
        value.parse("0x1F").unwrap();
        assert_eq!(value.as_int(), Some(31));
        assert_eq!(value.to_string(), "0x1f");

        value.parse("31").unwrap();
        assert_eq!(value.to_string(), "31");
        assert!(value.parse("1f").is_err());
        assert_eq!(value.as_int(), Some(31));
    }

    #[test]
    fn test_set_int_resets_display_base() {
        let mut value = ParameterValue::int(IntBase::Any);
        value.parse("0x10").unwrap();
        assert!(value.set_int(10));
        assert_eq!(value.to_string(), "10");

        let mut hex = ParameterValue::int(IntBase::Hex);
        assert!(hex.set_int(10));
        assert_eq!(hex.to_string(), "0xa");
    }

    #[test]
    fn test_int_error_names_expected_type() {
        let mut value = ParameterValue::int(IntBase::Decimal);
        let err = value.parse("abc").unwrap_err();
        assert_eq!(
            err,
            ValueError::Invalid {
                token: "abc".to_string(),
                expected: "integer: dec".to_string(),
            }
        );
    }

    #[test]
    fn test_bool_flag_and_literals() {
        let mut value = ParameterValue::boolean();
        assert!(!value.is_set());
        assert_eq!(value.as_bool(), None);

        value.parse_flag().unwrap();
        assert!(value.is_set());
        assert_eq!(value.as_bool(), Some(true));

        value.parse("no").unwrap();
        assert_eq!(value.as_bool(), Some(false));
        assert!(value.is_set());

        assert!(value.parse("maybe").is_err());
        assert!(value.is_set());
        assert_eq!(value.as_bool(), Some(false));
    }

    #[test]
    fn test_bool_failed_parse_keeps_unset_state() {
        let mut value = ParameterValue::boolean();
        assert!(value.parse("maybe").is_err());
        assert!(!value.is_set());
    }

    #[test]
    fn test_enum_token_integer_and_domain() {
        let mut value = sample_enum();
        assert_eq!(value.to_string(), "(undefined)");

        value.parse("O").unwrap();
        assert_eq!(value.as_enum(), Some(1));
        assert_eq!(value.to_string(), "O");

        assert!(matches!(
            value.parse("2"),
            Err(ValueError::OutOfDomain { .. })
        ));
        assert_eq!(value.as_enum(), Some(1));

        value.parse("0x7").unwrap();
        assert_eq!(value.to_string(), "7");
        value.parse("0").unwrap();
        assert_eq!(value.to_string(), "A");
        assert!(value.parse("a").is_err());
    }

    #[test]
    fn test_enum_options_info_lists_domain() {
        let info = sample_enum().options_info().unwrap();
        assert_eq!(
            info,
            "*mode:\n\t0 (A) - all\n\t1 (O) - only\n\t7 - seventh"
        );
        assert!(ParameterValue::string().options_info().is_none());
    }

    #[test]
    fn test_string_list_dedups_and_trims() {
        let mut value = ParameterValue::string_list(";");
        value.parse(" b; a ;b;; ").unwrap();
        let items: Vec<String> = value.string_elements().unwrap().into_iter().collect();
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
        assert!(value.parse(";;").is_err());
        assert_eq!(value.to_string(), "\" b; a ;b;; \"");
    }

    #[test]
    fn test_int_list_rejects_whole_input_on_bad_element() {
        let mut value = ParameterValue::int_list(",");
        assert_eq!(
            value.parse("3, 5,5,x"),
            Err(ValueError::InvalidListElement {
                element: "x".to_string()
            })
        );
        assert!(!value.is_set());
        assert_eq!(value.int_elements(), None);

        value.parse("-1, 2").unwrap();
        let items: Vec<i64> = value.int_elements().unwrap().into_iter().collect();
        assert_eq!(items, vec![-1, 2]);
    }

    #[test]
    fn test_wide_string_round_trips_utf16() {
        let mut value = ParameterValue::wide_string();
        value.parse("żółw").unwrap();
        assert_eq!(value.to_string(), "\"żółw\"");

        let wide: Vec<u16> = "abc".encode_utf16().collect();
        value.parse_wide(&wide).unwrap();
        assert_eq!(value.as_wide(), Some(wide.as_slice()));
    }

    #[test]
    fn test_parse_flag_requires_bool() {
        let mut value = ParameterValue::string();
        assert_eq!(value.parse_flag(), Err(ValueError::MissingValue));
        assert!(value.requires_arg());
        assert!(!ParameterValue::boolean().requires_arg());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(
            ParameterValue::int_list(",").type_name(),
            "list: dec or hex, separated by ','"
        );
        assert_eq!(sample_enum().type_name(), "*mode");
        assert_eq!(ParameterValue::wide_string().type_name(), "wstring");
    }
}
