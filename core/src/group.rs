//! Display groups.
//!
//! A group only partitions parameters for help output. It stores member
//! names; the registry stays the sole owner of the parameters.

use std::collections::BTreeSet;

/// A named, ordered-by-name set of parameter names.
///
/// The group with an empty name is the general group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterGroup {
    name: String,
    members: BTreeSet<String>,
}

impl ParameterGroup {
    /// Creates an empty group.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for the unnamed default group.
    pub fn is_general(&self) -> bool {
        self.name.is_empty()
    }

    pub fn contains(&self, param: &str) -> bool {
        self.members.contains(param)
    }

    /// Member names in name order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn insert(&mut self, param: &str) -> bool {
        self.members.insert(param.to_string())
    }

    pub(crate) fn remove(&mut self, param: &str) -> bool {
        self.members.remove(param)
    }
}
