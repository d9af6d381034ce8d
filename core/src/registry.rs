//! The parameter registry.
//!
//! [`ParameterRegistry`] owns every declared [`Parameter`] by unique name,
//! owns the display groups, and tracks which group each parameter is in.
//! All queries are total: unknown names yield `None` or `false`.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::DeclarationError;
use crate::group::ParameterGroup;
use crate::numeric;
use crate::param::Parameter;
use crate::style::{Emitter, Style};
use crate::value::ParameterValue;

/// Name of the implicit general group.
pub const GENERAL_GROUP: &str = "";

/// Owner of all declared parameters and groups.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, Parameter, ParameterRegistry};
///
/// let mut registry = ParameterRegistry::new();
/// registry
///     .register(Parameter::int("pdec", IntBase::Decimal).required())
///     .unwrap();
/// registry.register(Parameter::boolean("pbool")).unwrap();
/// assert!(registry.register(Parameter::string("pdec")).is_err());
///
/// assert!(!registry.has_required_filled());
/// registry.value_mut("pdec").unwrap().parse("42").unwrap();
/// assert!(registry.has_required_filled());
/// assert_eq!(registry.int_value("pdec"), Some(42));
/// assert_eq!(registry.bool_value("pbool"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    params: BTreeMap<String, Parameter>,
    groups: BTreeMap<String, ParameterGroup>,
    membership: BTreeMap<String, String>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parameter and places it in the general group.
    ///
    /// Fails without touching the registry if the name is taken.
    pub fn register(&mut self, parameter: Parameter) -> Result<(), DeclarationError> {
        let name = parameter.name().to_string();
        if self.params.contains_key(&name) {
            return Err(DeclarationError::DuplicateParameter(name));
        }
        debug!(param = %name, kind = %parameter.kind(), required = parameter.is_required(), "Registered parameter");
        self.params.insert(name.clone(), parameter);
        self.groups
            .entry(GENERAL_GROUP.to_string())
            .or_insert_with(|| ParameterGroup::new(GENERAL_GROUP))
            .insert(&name);
        self.membership.insert(name, GENERAL_GROUP.to_string());
        Ok(())
    }

    /// Declares an empty named group.
    pub fn add_group(&mut self, name: &str) -> Result<(), DeclarationError> {
        if self.groups.contains_key(name) {
            return Err(DeclarationError::DuplicateGroup(name.to_string()));
        }
        self.groups
            .insert(name.to_string(), ParameterGroup::new(name));
        Ok(())
    }

    /// Moves a parameter into a group.
    ///
    /// Returns `false` and changes nothing if either name is unknown.
    pub fn assign_group(&mut self, param: &str, group: &str) -> bool {
        if !self.params.contains_key(param) || !self.groups.contains_key(group) {
            return false;
        }
        if let Some(current) = self.membership.get(param) {
            if current == group {
                return true;
            }
            if let Some(old) = self.groups.get_mut(current) {
                old.remove(param);
            }
        }
        if let Some(target) = self.groups.get_mut(group) {
            target.insert(param);
        }
        self.membership
            .insert(param.to_string(), group.to_string());
        debug!(param, group, "Moved parameter to group");
        true
    }

    /// Replaces a parameter's descriptions. Returns `false` for unknown names.
    pub fn set_info(&mut self, param: &str, info: &str, extended_info: &str) -> bool {
        let Some(parameter) = self.params.get_mut(param) else {
            return false;
        };
        parameter.set_info(info, extended_info);
        true
    }

    /// Activates or deactivates a parameter. Returns `false` for unknown names.
    pub fn set_active(&mut self, param: &str, active: bool) -> bool {
        let Some(parameter) = self.params.get_mut(param) else {
            return false;
        };
        parameter.set_active(active);
        true
    }

    pub fn contains(&self, param: &str) -> bool {
        self.params.contains_key(param)
    }

    pub fn get(&self, param: &str) -> Option<&Parameter> {
        self.params.get(param)
    }

    /// Mutable access to a parameter's value. The parameter itself, and so
    /// its name, stays owned by the registry.
    pub fn value_mut(&mut self, param: &str) -> Option<&mut ParameterValue> {
        self.params.get_mut(param).map(Parameter::value_mut)
    }

    pub fn value(&self, param: &str) -> Option<&ParameterValue> {
        self.params.get(param).map(Parameter::value)
    }

    /// Parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    /// Declared parameter names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Groups in name order; the general group, when present, comes first.
    pub fn groups(&self) -> impl Iterator<Item = &ParameterGroup> {
        self.groups.values()
    }

    pub fn group(&self, name: &str) -> Option<&ParameterGroup> {
        self.groups.get(name)
    }

    /// Name of the group a parameter currently belongs to.
    pub fn group_of(&self, param: &str) -> Option<&str> {
        self.membership.get(param).map(String::as_str)
    }

    pub fn is_set(&self, param: &str) -> bool {
        self.params.get(param).is_some_and(Parameter::is_set)
    }

    /// Returns `true` when every active required parameter is set.
    pub fn has_required_filled(&self) -> bool {
        self.params
            .values()
            .all(|p| !p.is_required() || !p.is_active() || p.is_set())
    }

    /// Names of active required parameters that are still unset.
    pub fn missing_required(&self) -> Vec<&str> {
        self.params
            .values()
            .filter(|p| p.is_required() && p.is_active() && !p.is_set())
            .map(Parameter::name)
            .collect()
    }

    /// Number of required (or optional) parameters.
    pub fn count_category(&self, required: bool) -> usize {
        self.params
            .values()
            .filter(|p| p.is_required() == required)
            .count()
    }

    /// Number of required (or optional) parameters that are set.
    pub fn count_filled(&self, required: bool) -> usize {
        self.params
            .values()
            .filter(|p| p.is_required() == required && p.is_set())
            .count()
    }

    pub fn int_value(&self, param: &str) -> Option<u64> {
        self.value(param)?.as_int()
    }

    /// Overwrites an integer parameter. Returns `false` for unknown names and
    /// other variants.
    pub fn set_int_value(&mut self, param: &str, number: u64) -> bool {
        self.params
            .get_mut(param)
            .is_some_and(|p| p.value_mut().set_int(number))
    }

    pub fn bool_value(&self, param: &str) -> Option<bool> {
        self.value(param)?.as_bool()
    }

    pub fn string_value(&self, param: &str) -> Option<&str> {
        self.value(param)?.as_str()
    }

    pub fn wide_string_value(&self, param: &str) -> Option<&[u16]> {
        self.value(param)?.as_wide()
    }

    pub fn enum_value(&self, param: &str) -> Option<i64> {
        self.value(param)?.as_enum()
    }

    pub fn string_list(&self, param: &str) -> Option<BTreeSet<String>> {
        self.value(param)?.string_elements()
    }

    pub fn int_list(&self, param: &str) -> Option<BTreeSet<i64>> {
        self.value(param)?.int_elements()
    }

    /// Copies a set string parameter into `buf` with a zero terminator.
    ///
    /// Returns the number of bytes written including the terminator, or
    /// `None` if the parameter is unknown, not a string, or unset.
    pub fn copy_string(&self, param: &str, buf: &mut [u8]) -> Option<usize> {
        let text = self.string_value(param)?;
        Some(numeric::copy_to_buffer(text.as_bytes(), buf))
    }

    /// Copies a set wide string parameter into `buf` with a zero terminator.
    pub fn copy_wide_string(&self, param: &str, buf: &mut [u16]) -> Option<usize> {
        let units = self.wide_string_value(param)?;
        Some(numeric::copy_to_buffer(units, buf))
    }

    /// Emits `/name: value` for every set parameter, in name order.
    pub fn print_values(&self, switch: char, out: &mut dyn Emitter) {
        for param in self.params.values().filter(|p| p.is_set()) {
            out.emit(&format!("{switch}{}", param.name()), Style::Parameter);
            out.emit(&format!(": {}\n", param.value()), Style::Normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntBase;

    fn sample_registry() -> ParameterRegistry {
        let mut registry = ParameterRegistry::new();
        registry
            .register(Parameter::int("pdec", IntBase::Decimal).required())
            .unwrap();
        registry.register(Parameter::boolean("pbool")).unwrap();
        registry.register(Parameter::string("pastr")).unwrap();
        registry
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = sample_registry();
        let err = registry
            .register(Parameter::boolean("pdec"))
            .unwrap_err();
        assert_eq!(err, DeclarationError::DuplicateParameter("pdec".to_string()));
        assert_eq!(registry.get("pdec").unwrap().kind(), crate::ParameterKind::Int);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_places_into_general_group() {
        let registry = sample_registry();
        assert_eq!(registry.group_of("pbool"), Some(GENERAL_GROUP));
        let general = registry.group(GENERAL_GROUP).unwrap();
        assert_eq!(
            general.members().collect::<Vec<_>>(),
            vec!["pastr", "pbool", "pdec"]
        );
    }

    #[test]
    fn test_general_group_created_lazily() {
        let registry = ParameterRegistry::new();
        assert!(registry.group(GENERAL_GROUP).is_none());
        assert_eq!(registry.groups().count(), 0);
    }

    #[test]
    fn test_assign_group_moves_membership() {
        let mut registry = sample_registry();
        registry.add_group("numbers").unwrap();
        registry.add_group("flags").unwrap();

        assert!(registry.assign_group("pdec", "numbers"));
        assert!(registry.assign_group("pdec", "flags"));
        assert_eq!(registry.group_of("pdec"), Some("flags"));
        assert!(!registry.group("numbers").unwrap().contains("pdec"));
        assert!(!registry.group(GENERAL_GROUP).unwrap().contains("pdec"));
        assert!(registry.group("flags").unwrap().contains("pdec"));
    }

    #[test]
    fn test_assign_group_unknown_names_is_noop() {
        let mut registry = sample_registry();
        registry.add_group("numbers").unwrap();
        assert!(!registry.assign_group("missing", "numbers"));
        assert!(!registry.assign_group("pdec", "missing"));
        assert_eq!(registry.group_of("pdec"), Some(GENERAL_GROUP));
        assert!(registry.group("numbers").unwrap().is_empty());
    }

    #[test]
    fn test_add_group_rejects_duplicates() {
        let mut registry = sample_registry();
        registry.add_group("io").unwrap();
        assert_eq!(
            registry.add_group("io"),
            Err(DeclarationError::DuplicateGroup("io".to_string()))
        );
    }

    #[test]
    fn test_required_filled_ignores_inactive() {
        let mut registry = sample_registry();
        registry
            .register(Parameter::string("pout").required())
            .unwrap();
        assert_eq!(registry.missing_required(), vec!["pdec", "pout"]);

        registry.set_active("pout", false);
        registry.set_int_value("pdec", 5);
        assert!(registry.has_required_filled());
        assert!(registry.has_required_filled());
    }

    #[test]
    fn test_queries_are_total() {
        let registry = sample_registry();
        assert!(!registry.is_set("missing"));
        assert_eq!(registry.int_value("missing"), None);
        assert_eq!(registry.int_value("pbool"), None);
        assert_eq!(registry.string_value("pastr"), None);
        assert!(registry.value("missing").is_none());
    }

    #[test]
    fn test_counts() {
        let mut registry = sample_registry();
        assert_eq!(registry.count_category(true), 1);
        assert_eq!(registry.count_category(false), 2);
        assert_eq!(registry.count_filled(false), 0);
        registry
            .value_mut("pbool")
            .unwrap()
            .parse_flag()
            .unwrap();
        assert_eq!(registry.count_filled(false), 1);
    }

    #[test]
    fn test_copy_string_truncates() {
        let mut registry = sample_registry();
        registry
            .value_mut("pastr")
            .unwrap()
            .parse("abcdef")
            .unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(registry.copy_string("pastr", &mut buf), Some(4));
        assert_eq!(&buf, b"abc\0");
        assert_eq!(registry.copy_string("pdec", &mut buf), None);
    }

    #[test]
    fn test_value_mut_keeps_name_bound_to_key() {
        let mut registry = sample_registry();
        *registry.value_mut("pdec").unwrap() = ParameterValue::int(IntBase::Hex);
        assert_eq!(registry.get("pdec").unwrap().name(), "pdec");
        assert!(!registry.contains("zzz"));
        assert!(registry.value_mut("zzz").is_none());

        registry.register(Parameter::boolean("zzz")).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["pastr", "pbool", "pdec", "zzz"]);
        assert!(registry.iter().all(|p| registry.get(p.name()).is_some()));
    }

    #[test]
    fn test_print_values_lists_set_parameters() {
        let mut registry = sample_registry();
        registry.set_int_value("pdec", 7);
        let mut out = crate::Transcript::default();
        registry.print_values('/', &mut out);
        assert_eq!(out.text(), "/pdec: 7\n");
    }
}
