//! Value dumps of a parsed registry.

use paramkit_core::{ParameterKind, ParameterRegistry};
use serde::Serialize;

use crate::error::OutputError;

/// Supported dump formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValuesFormat {
    Json,
    Yaml,
    Table,
}

/// One set parameter, as dumped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueSnapshot {
    pub name: String,
    pub kind: ParameterKind,
    pub required: bool,
    /// Display form of the value, as `print_values` shows it.
    pub value: String,
}

/// Collects every set parameter in name order.
pub fn snapshot_values(registry: &ParameterRegistry) -> Vec<ValueSnapshot> {
    registry
        .iter()
        .filter(|param| param.is_set())
        .map(|param| ValueSnapshot {
            name: param.name().to_string(),
            kind: param.kind(),
            required: param.is_required(),
            value: param.value().to_string(),
        })
        .collect()
}

/// Formats the set parameters of `registry` in the requested format.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, Parameter, ParameterRegistry};
/// use paramkit_parser::{ValuesFormat, format_values};
///
/// let mut registry = ParameterRegistry::new();
/// registry.register(Parameter::int("phex", IntBase::Hex)).unwrap();
/// registry.set_int_value("phex", 255);
///
/// let json = format_values(&registry, ValuesFormat::Json).unwrap();
/// assert!(json.contains("\"value\": \"0xff\""));
/// ```
pub fn format_values(
    registry: &ParameterRegistry,
    format: ValuesFormat,
) -> Result<String, OutputError> {
    let values = snapshot_values(registry);
    match format {
        ValuesFormat::Json => Ok(serde_json::to_string_pretty(&values)?),
        ValuesFormat::Yaml => Ok(serde_yaml::to_string(&values)?),
        ValuesFormat::Table => Ok(values_to_table(&values)),
    }
}

fn values_to_table(values: &[ValueSnapshot]) -> String {
    let mut out = String::new();
    if values.is_empty() {
        out.push_str("No parameters set.\n");
        return out;
    }

    let max_name = values.iter().map(|v| v.name.len()).max().unwrap_or(4);
    let max_kind = values
        .iter()
        .map(|v| v.kind.to_string().len())
        .max()
        .unwrap_or(4);
    for value in values {
        out.push_str(&format!(
            "  {:<name_width$}  {:<kind_width$}  {}\n",
            value.name,
            value.kind.to_string(),
            value.value,
            name_width = max_name,
            kind_width = max_kind,
        ));
    }
    out
}
