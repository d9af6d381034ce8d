//! Grouped, filterable parameter listings for help output.
//!
//! [`ParameterRegistry::describe`] builds a [`Listing`] (plain data), and
//! [`Listing::render`] turns it into styled text. Parameters are split into
//! Required and Optional sections; inside a section they are grouped by
//! display group and sorted by name.

use crate::param::Parameter;
use crate::registry::ParameterRegistry;
use crate::similarity::Similarity;
use crate::style::{Emitter, Style};

/// Options controlling [`ParameterRegistry::describe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Only list parameters whose name or description matches this text.
    pub filter: Option<String>,
    /// Only list required parameters that are still unset, styled as warnings.
    pub hilight_missing: bool,
    /// Include extended descriptions.
    pub extended: bool,
    /// Switch character printed before parameter names.
    pub switch: char,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            filter: None,
            hilight_missing: false,
            extended: true,
            switch: '/',
        }
    }
}

impl DescribeOptions {
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = if filter.is_empty() {
            None
        } else {
            Some(filter.to_string())
        };
        self
    }

    pub fn hilight_missing(mut self) -> Self {
        self.hilight_missing = true;
        self
    }

    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_switch(mut self, switch: char) -> Self {
        self.switch = switch;
        self
    }
}

/// Which signal made a parameter pass a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSignal {
    /// The name is similar to the filter.
    Name(Similarity),
    /// A description, the type text or an enum option mentions the filter.
    Description(Similarity),
}

/// One listed parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    /// Type text, present only for parameters that take a value.
    pub type_description: Option<String>,
    pub description: String,
    pub style: Style,
    pub signal: Option<MatchSignal>,
}

/// Listed parameters of one display group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingGroup {
    /// Heading to print, `None` for the flattened general group or when no
    /// named group has visible entries.
    pub heading: Option<String>,
    pub entries: Vec<ListingEntry>,
}

/// The Required or Optional part of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSection {
    pub required: bool,
    pub groups: Vec<ListingGroup>,
    /// Parameters of this category left out by the filter or hilight mode.
    pub hidden: usize,
}

impl ListingSection {
    pub fn entries(&self) -> impl Iterator<Item = &ListingEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }
}

/// A rendered-ready description of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub sections: Vec<ListingSection>,
    pub switch: char,
}

impl Listing {
    /// All listed entries, section by section.
    pub fn entries(&self) -> impl Iterator<Item = &ListingEntry> {
        self.sections.iter().flat_map(ListingSection::entries)
    }

    /// Number of listed entries.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the listing through `out`.
    pub fn render(&self, out: &mut dyn Emitter) {
        for section in &self.sections {
            let header = if section.required {
                "Required:"
            } else {
                "Optional:"
            };
            out.emit(&format!("\n{header}\n"), Style::Header);

            for group in &section.groups {
                if let Some(heading) = &group.heading {
                    out.emit(&format!("\n---{heading}---\n"), Style::Separator);
                }
                for entry in &group.entries {
                    render_entry(self.switch, entry, out);
                }
            }
            if section.hidden > 0 {
                out.emit("\n[...]\n", Style::Inactive);
            }
        }
    }
}

/// Writes one parameter as `/name <type>` followed by its description.
pub fn render_entry(switch: char, entry: &ListingEntry, out: &mut dyn Emitter) {
    out.emit(&format!("{switch}{}", entry.name), entry.style);
    if let Some(type_description) = &entry.type_description {
        out.emit(&format!(" <{type_description}>"), Style::Normal);
    }
    out.emit(&format!("\n\t : {}\n", entry.description), Style::Normal);
}

impl ParameterRegistry {
    /// Builds a listing of the declared parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramkit_core::{DescribeOptions, IntBase, Parameter, ParameterRegistry, Style};
    ///
    /// let mut registry = ParameterRegistry::new();
    /// registry
    ///     .register(Parameter::int("pdec", IntBase::Decimal).required().with_info("decimal"))
    ///     .unwrap();
    /// registry
    ///     .register(Parameter::boolean("pbool").with_info("flag"))
    ///     .unwrap();
    ///
    /// let listing = registry.describe(&DescribeOptions::default().hilight_missing());
    /// let names: Vec<&str> = listing.entries().map(|e| e.name.as_str()).collect();
    /// assert_eq!(names, vec!["pdec"]);
    /// assert_eq!(listing.sections[0].groups[0].entries[0].style, Style::Warning);
    /// ```
    pub fn describe(&self, options: &DescribeOptions) -> Listing {
        let mut sections = Vec::new();
        for required in [true, false] {
            if self.count_category(required) == 0 {
                continue;
            }
            sections.push(self.describe_section(required, options));
        }
        Listing {
            sections,
            switch: options.switch,
        }
    }

    /// Parameters hidden by the current options are counted, not listed.
    fn describe_section(&self, required: bool, options: &DescribeOptions) -> ListingSection {
        let mut groups = Vec::new();
        let mut listed = 0;
        for group in self.groups() {
            let entries: Vec<ListingEntry> = group
                .members()
                .filter_map(|name| self.get(name))
                .filter(|param| param.is_required() == required)
                .filter_map(|param| describe_entry(param, options))
                .collect();
            if entries.is_empty() {
                continue;
            }
            listed += entries.len();
            let heading = (!group.is_general()).then(|| group.name().to_string());
            groups.push(ListingGroup { heading, entries });
        }

        let named_visible = groups.iter().any(|group| group.heading.is_some());
        if !named_visible {
            for group in &mut groups {
                group.heading = None;
            }
        }

        ListingSection {
            required,
            groups,
            hidden: self.count_category(required) - listed,
        }
    }
}

fn describe_entry(param: &Parameter, options: &DescribeOptions) -> Option<ListingEntry> {
    let missing = param.is_required() && param.is_active() && !param.is_set();
    if options.hilight_missing && !missing {
        return None;
    }

    let mut style = if options.hilight_missing {
        Style::Warning
    } else {
        Style::Parameter
    };
    let mut signal = None;
    if let Some(filter) = &options.filter {
        let by_name = param.name_similarity(filter);
        if by_name.is_match() {
            style = Style::NameMatch;
            signal = Some(MatchSignal::Name(by_name));
        } else {
            let by_description = param.keyword_similarity(filter);
            if !by_description.is_match() {
                return None;
            }
            style = Style::DescriptionMatch;
            signal = Some(MatchSignal::Description(by_description));
        }
    }
    if !param.is_active() {
        style = Style::Inactive;
    }

    Some(ListingEntry {
        name: param.name().to_string(),
        type_description: param.requires_arg().then(|| param.type_description()),
        description: param.description(options.extended),
        style,
        signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Transcript;
    use crate::value::IntBase;

    fn sample_registry() -> ParameterRegistry {
        let mut registry = ParameterRegistry::new();
        registry
            .register(
                Parameter::int("pdec", IntBase::Decimal)
                    .required()
                    .with_info("Sample decimal integer"),
            )
            .unwrap();
        registry
            .register(
                Parameter::int("phex", IntBase::Hex)
                    .required()
                    .with_info("Sample hexadecimal integer"),
            )
            .unwrap();
        registry
            .register(Parameter::boolean("pbool").with_info("Sample boolean"))
            .unwrap();
        registry
            .register(
                Parameter::string("pastr")
                    .with_info("Sample string")
                    .with_extended_info("Any text."),
            )
            .unwrap();
        registry
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing.entries().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sections_sorted_by_name() {
        let listing = sample_registry().describe(&DescribeOptions::default());
        assert_eq!(listing.sections.len(), 2);
        assert!(listing.sections[0].required);
        assert_eq!(names(&listing), vec!["pdec", "phex", "pastr", "pbool"]);
        assert!(listing.sections.iter().all(|s| s.hidden == 0));
    }

    #[test]
    fn test_empty_category_has_no_section() {
        let mut registry = ParameterRegistry::new();
        registry.register(Parameter::boolean("pbool")).unwrap();
        let listing = registry.describe(&DescribeOptions::default());
        assert_eq!(listing.sections.len(), 1);
        assert!(!listing.sections[0].required);
    }

    #[test]
    fn test_groups_get_headings_and_general_is_flattened() {
        let mut registry = sample_registry();
        registry.add_group("numbers").unwrap();
        registry.assign_group("phex", "numbers");

        let listing = registry.describe(&DescribeOptions::default());
        let required = &listing.sections[0];
        assert_eq!(required.groups.len(), 2);
        assert_eq!(required.groups[0].heading, None);
        assert_eq!(required.groups[1].heading.as_deref(), Some("numbers"));

        let optional = &listing.sections[1];
        assert!(optional.groups.iter().all(|g| g.heading.is_none()));
    }

    #[test]
    fn test_filter_tags_name_and_description_matches() {
        let listing = sample_registry()
            .describe(&DescribeOptions::default().with_filter("hexadecimal"));
        let entries: Vec<&ListingEntry> = listing.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "phex");
        assert_eq!(entries[0].style, Style::DescriptionMatch);
        assert_eq!(
            entries[0].signal,
            Some(MatchSignal::Description(Similarity::Substring))
        );

        let listing = sample_registry().describe(&DescribeOptions::default().with_filter("pdc"));
        let entry = listing.entries().find(|e| e.name == "pdec").unwrap();
        assert_eq!(entry.style, Style::NameMatch);
        assert_eq!(entry.signal, Some(MatchSignal::Name(Similarity::EditDistance)));
        assert!(listing.sections[0].hidden > 0);
    }

    #[test]
    fn test_hilight_missing_lists_only_unset_required() {
        let mut registry = sample_registry();
        registry.set_int_value("pdec", 1);
        let listing = registry.describe(&DescribeOptions::default().hilight_missing());
        assert_eq!(names(&listing), vec!["phex"]);
        assert_eq!(listing.sections[0].hidden, 1);
        assert_eq!(listing.sections[1].hidden, 2);
    }

    #[test]
    fn test_inactive_entries_use_inactive_style() {
        let mut registry = sample_registry();
        registry.set_active("pbool", false);
        let listing = registry.describe(&DescribeOptions::default());
        let entry = listing.entries().find(|e| e.name == "pbool").unwrap();
        assert_eq!(entry.style, Style::Inactive);
    }

    #[test]
    fn test_render_format() {
        let mut registry = ParameterRegistry::new();
        registry
            .register(
                Parameter::int("pdec", IntBase::Decimal)
                    .required()
                    .with_info("Sample decimal integer"),
            )
            .unwrap();
        registry
            .register(Parameter::boolean("pbool").with_info("Sample boolean"))
            .unwrap();

        let mut out = Transcript::default();
        registry.describe(&DescribeOptions::default()).render(&mut out);
        assert_eq!(
            out.text(),
            "\nRequired:\n/pdec <integer: dec>\n\t : Sample decimal integer\n\
             \nOptional:\n/pbool\n\t : Sample boolean\n"
        );
        assert!(out.has_styled("Required:", Style::Header));
        assert!(out.has_styled("/pdec", Style::Parameter));
    }

    #[test]
    fn test_render_elision_marker() {
        let mut out = Transcript::default();
        sample_registry()
            .describe(&DescribeOptions::default().with_filter("boolean"))
            .render(&mut out);
        assert!(out.has_styled("[...]", Style::Inactive));
        assert!(out.text().contains("/pbool"));
    }

    #[test]
    fn test_extended_toggle() {
        let registry = sample_registry();
        let brief = registry.describe(&DescribeOptions::default().with_extended(false));
        let entry = brief.entries().find(|e| e.name == "pastr").unwrap();
        assert_eq!(entry.description, "Sample string");

        let full = registry.describe(&DescribeOptions::default());
        let entry = full.entries().find(|e| e.name == "pastr").unwrap();
        assert_eq!(entry.description, "Sample string\nAny text.");
    }
}
