//! Help, version and parameter-detail output.
//!
//! Every listing goes through [`ParameterRegistry::describe`], framed by
//! `---` lines and followed by an `Info:` section describing the reserved
//! keywords.

use paramkit_core::{
    DescribeOptions, Emitter, ListingEntry, ParameterRegistry, Style, render_entry,
};

use crate::config::ParserConfig;

/// Indent used for example lines in extended descriptions.
const INFO_SPACER: &str = "\t   ";

/// Renders help for one registry under one configuration.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, Parameter, ParameterRegistry, Transcript};
/// use paramkit_parser::{HelpPrinter, ParserConfig};
///
/// let mut registry = ParameterRegistry::new();
/// registry
///     .register(Parameter::int("pdec", IntBase::Decimal).with_info("decimal"))
///     .unwrap();
/// let config = ParserConfig::default();
///
/// let mut out = Transcript::default();
/// HelpPrinter::new(&registry, &config).print_brief_info(&mut out);
/// assert!(out.text().starts_with("---\n"));
/// assert!(out.text().contains("/pdec <integer: dec>"));
/// assert!(out.text().contains("\nInfo:\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HelpPrinter<'a> {
    registry: &'a ParameterRegistry,
    config: &'a ParserConfig,
}

impl<'a> HelpPrinter<'a> {
    pub fn new(registry: &'a ParameterRegistry, config: &'a ParserConfig) -> Self {
        Self { registry, config }
    }

    /// Default listing options for this configuration.
    pub fn describe_options(&self) -> DescribeOptions {
        DescribeOptions::default().with_switch(self.config.primary_switch)
    }

    /// Prints a framed listing followed by the info section.
    ///
    /// The info section is only extended for plain, unfiltered listings.
    pub fn print_info(&self, options: &DescribeOptions, out: &mut dyn Emitter) {
        out.emit("---\n", Style::Normal);
        self.registry.describe(options).render(out);
        let extended = options.filter.is_none() && !options.hilight_missing && options.extended;
        self.print_info_section(extended, out);
        out.emit("---\n", Style::Normal);
    }

    /// Prints the listing without extended descriptions.
    pub fn print_brief_info(&self, out: &mut dyn Emitter) {
        self.print_info(&self.describe_options().with_extended(false), out);
    }

    /// Prints the listing filtered by `filter`.
    pub fn print_filtered(&self, filter: &str, extended: bool, out: &mut dyn Emitter) {
        let options = self
            .describe_options()
            .with_filter(filter)
            .with_extended(extended);
        self.print_info(&options, out);
    }

    /// Prints the Required section with missing parameters highlighted.
    pub fn print_missing(&self, out: &mut dyn Emitter) {
        self.print_info(&self.describe_options().hilight_missing(), out);
    }

    /// Answers a help request.
    ///
    /// Without a topic this is the full listing, preceded by the banner. A
    /// help keyword as topic prints the info section, a version keyword the
    /// version entry, and any other topic filters the listing.
    pub fn print_help(&self, topic: Option<&str>, extended: bool, out: &mut dyn Emitter) {
        let Some(topic) = topic else {
            self.print_banner(out);
            self.print_info(&self.describe_options().with_extended(extended), out);
            return;
        };
        if self.config.is_help_keyword(topic) {
            self.print_banner(out);
            self.print_info_section(true, out);
            return;
        }
        if self.config.version_keywords.iter().any(|k| k == topic) {
            if self.config.version.is_some() {
                render_entry(self.config.primary_switch, &self.version_entry(), out);
            } else {
                out.emit("Application version is not set\n", Style::Normal);
            }
            return;
        }
        self.print_filtered(topic, extended, out);
    }

    /// Describes the reserved keywords.
    pub fn print_info_section(&self, extended: bool, out: &mut dyn Emitter) {
        out.emit("\nInfo:\n", Style::Header);
        let switch = self.config.primary_switch;
        let help = &self.config.help_keyword;

        render_entry(
            switch,
            &info_entry(help, None, "Print complete help."),
            out,
        );
        render_entry(
            switch,
            &info_entry(help, Some("keyword"), "Print help about a given keyword."),
            out,
        );

        let mut details = info_entry(
            &format!("<param> {}", self.config.help_shorthand),
            None,
            "Print details of a given parameter.",
        );
        if extended {
            if let Some(first) = self.registry.names().next() {
                details.description.push_str(&format!(
                    "\n{INFO_SPACER}Example: {switch}{first} {}",
                    self.config.help_shorthand
                ));
            }
        }
        render_entry(switch, &details, out);

        if self.config.version.is_some() {
            render_entry(switch, &self.version_entry(), out);
        }
    }

    /// Prints the configured version string, if any.
    pub fn print_version(&self, out: &mut dyn Emitter) {
        if let Some(version) = &self.config.version {
            out.emit(&format!("{version}\n"), Style::Normal);
        }
    }

    /// Prints the configured banner, if any.
    pub fn print_banner(&self, out: &mut dyn Emitter) {
        if let Some(banner) = &self.config.banner {
            out.emit(&format!("{banner}\n"), Style::Normal);
        }
    }

    /// Prints one parameter with its extended description, in warning style.
    ///
    /// Returns `false` if no such parameter is declared.
    pub fn print_parameter(&self, name: &str, out: &mut dyn Emitter) -> bool {
        let Some(param) = self.registry.get(name) else {
            return false;
        };
        let entry = ListingEntry {
            name: param.name().to_string(),
            type_description: param.requires_arg().then(|| param.type_description()),
            description: param.description(true),
            style: Style::Warning,
            signal: None,
        };
        render_entry(self.config.primary_switch, &entry, out);
        true
    }

    fn version_entry(&self) -> ListingEntry {
        let keyword = self
            .config
            .version_keywords
            .first()
            .map(String::as_str)
            .unwrap_or("version");
        info_entry(keyword, None, "Print version info.")
    }
}

fn info_entry(name: &str, type_description: Option<&str>, description: &str) -> ListingEntry {
    ListingEntry {
        name: name.to_string(),
        type_description: type_description.map(String::from),
        description: description.to_string(),
        style: Style::Parameter,
        signal: None,
    }
}
