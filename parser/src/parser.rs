//! The command-line walker.
//!
//! [`ArgumentParser`] consumes tokens one at a time against a
//! [`ParameterRegistry`], filling parameter values in place. The walk is an
//! explicit state machine: scanning for the next switch, waiting for the value
//! of a matched parameter, or stopped with an [`Outcome`]. Every user-facing
//! stop renders help through [`HelpPrinter`].

use paramkit_core::{
    Emitter, Parameter, ParameterRegistry, ParameterValue, Style, ValueResult, validate_registry,
};
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ArgError, Suggestion};
use crate::help::HelpPrinter;
use crate::outcome::{Outcome, ParseReport};
use crate::switch;

/// One command-line token, narrow or wide.
#[derive(Debug)]
enum Token<'a> {
    Narrow(&'a str),
    Wide { text: String, units: &'a [u16] },
}

impl Token<'_> {
    fn text(&self) -> &str {
        match self {
            Self::Narrow(text) => text,
            Self::Wide { text, .. } => text,
        }
    }

    /// Wide tokens keep their UTF-16 units for wide string parameters.
    fn parse_into(&self, value: &mut ParameterValue) -> ValueResult {
        match self {
            Self::Narrow(text) => value.parse(text),
            Self::Wide { units, .. } => value.parse_wide(units),
        }
    }
}

/// Where the walk currently is.
#[derive(Debug)]
enum State {
    /// Looking at the token at `index`.
    Scanning { index: usize },
    /// Parameter `name` matched at `index`; its value, if any, follows.
    ExpectValue { name: String, index: usize },
    /// All tokens consumed.
    Exhausted,
    /// Stopped early.
    Stopped(Outcome),
}

/// Parses command lines against a registry.
///
/// # Examples
///
/// ```
/// use paramkit_core::{IntBase, Parameter, ParameterRegistry, Transcript};
/// use paramkit_parser::{ArgumentParser, Outcome, ParserConfig};
///
/// let mut registry = ParameterRegistry::new();
/// registry
///     .register(Parameter::int("pdec", IntBase::Decimal).required())
///     .unwrap();
/// registry.register(Parameter::boolean("pbool")).unwrap();
///
/// let parser = ArgumentParser::new(ParserConfig::default());
/// let mut out = Transcript::default();
/// let report = parser.parse(&mut registry, &["app", "/pdec", "42", "-pbool"], &mut out);
///
/// assert_eq!(report.outcome, Outcome::Done);
/// assert_eq!(report.matched, 2);
/// assert_eq!(registry.int_value("pdec"), Some(42));
/// assert_eq!(registry.bool_value("pbool"), Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    config: ParserConfig,
}

impl ArgumentParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `args`, skipping the program name at index 0.
    pub fn parse<S: AsRef<str>>(
        &self,
        registry: &mut ParameterRegistry,
        args: &[S],
        out: &mut dyn Emitter,
    ) -> ParseReport {
        let tokens: Vec<Token<'_>> = args.iter().map(|a| Token::Narrow(a.as_ref())).collect();
        self.run(registry, &tokens, out)
    }

    /// Parses UTF-16 arguments. Wide string parameters receive the units
    /// unchanged; everything else sees a lossy UTF-8 conversion.
    pub fn parse_wide<S: AsRef<[u16]>>(
        &self,
        registry: &mut ParameterRegistry,
        args: &[S],
        out: &mut dyn Emitter,
    ) -> ParseReport {
        let tokens: Vec<Token<'_>> = args
            .iter()
            .map(|a| {
                let units = a.as_ref();
                Token::Wide {
                    text: String::from_utf16_lossy(units),
                    units,
                }
            })
            .collect();
        self.run(registry, &tokens, out)
    }

    fn run(
        &self,
        registry: &mut ParameterRegistry,
        tokens: &[Token<'_>],
        out: &mut dyn Emitter,
    ) -> ParseReport {
        if self.config.lint_declarations {
            self.lint(registry);
        }

        let mut warnings = Vec::new();
        let mut matched = 0;
        let mut state = State::Scanning { index: 1 };
        let outcome = loop {
            state = match state {
                State::Scanning { index } => match tokens.get(index) {
                    Some(token) => {
                        self.scan(registry, tokens, index, token.text(), &mut warnings, out)
                    }
                    None => State::Exhausted,
                },
                State::ExpectValue { name, index } => {
                    matched += 1;
                    self.take_value(registry, tokens, name, index, out)
                }
                State::Exhausted => break self.finish(registry, matched, out),
                State::Stopped(outcome) => break outcome,
            };
        };

        debug!(outcome = ?outcome, matched, warnings = warnings.len(), "Finished parsing arguments");
        ParseReport {
            outcome,
            warnings,
            matched,
        }
    }

    /// Classifies the token at `index`.
    fn scan(
        &self,
        registry: &ParameterRegistry,
        tokens: &[Token<'_>],
        index: usize,
        token: &str,
        warnings: &mut Vec<ArgError>,
        out: &mut dyn Emitter,
    ) -> State {
        if !switch::is_switch(&self.config, token) {
            warn!(token, index, "Redundant argument");
            out.emit("Redundant argument: ", Style::Warning);
            out.emit(&format!("{token}\n"), Style::Normal);
            warnings.push(ArgError::RedundantArgument(token.to_string()));
            return State::Scanning { index: index + 1 };
        }

        let name = switch::strip_prefix(&self.config, token);
        let help = HelpPrinter::new(registry, &self.config);

        if self.config.is_help_keyword(name) {
            let topic = tokens
                .get(index + 1)
                .map(Token::text)
                .filter(|next| {
                    name == self.config.help_keyword && !switch::is_switch(&self.config, next)
                });
            debug!(keyword = name, topic, "Help requested");
            let extended = name == self.config.help_keyword;
            help.print_help(topic, extended, out);
            return State::Stopped(Outcome::HelpRequested {
                topic: topic.map(String::from),
            });
        }

        if self.config.is_version_keyword(name) {
            debug!(keyword = name, "Version requested");
            help.print_version(out);
            return State::Stopped(Outcome::VersionRequested);
        }

        let Some(param) = registry.get(name) else {
            let suggestions = suggest(registry, name);
            debug!(name, suggestions = suggestions.len(), "Unknown parameter");
            out.emit("Invalid parameter: ", Style::Warning);
            out.emit(&format!("{name}\n"), Style::Normal);
            out.emit("Similar parameters:\n", Style::Header);
            help.print_filtered(name, true, out);
            return State::Stopped(Outcome::Failed(ArgError::UnknownParameter {
                name: name.to_string(),
                suggestions,
            }));
        };

        if !param.is_active() {
            warn!(name, "Inactive parameter supplied");
            out.emit(
                &format!("WARNING: chosen inactive parameter: {name}\n"),
                Style::Warning,
            );
        }
        debug!(name, index, "Matched parameter");
        State::ExpectValue {
            name: name.to_string(),
            index,
        }
    }

    /// Feeds the parameter matched at `index` with the following token, or
    /// treats it as a bare flag.
    fn take_value(
        &self,
        registry: &mut ParameterRegistry,
        tokens: &[Token<'_>],
        name: String,
        index: usize,
        out: &mut dyn Emitter,
    ) -> State {
        let Some(requires_arg) = registry.get(&name).map(Parameter::requires_arg) else {
            return State::Scanning { index: index + 1 };
        };
        let next = tokens
            .get(index + 1)
            .filter(|next| requires_arg || !switch::is_switch(&self.config, next.text()));

        if next.is_some_and(|token| token.text() == self.config.help_shorthand) {
            debug!(name = %name, "Parameter details requested");
            HelpPrinter::new(registry, &self.config).print_parameter(&name, out);
            return State::Stopped(Outcome::ParameterInfo { name });
        }

        let Some(value) = registry.value_mut(&name) else {
            return State::Scanning { index: index + 1 };
        };
        let result = match next {
            Some(token) => token.parse_into(value).map_err(|source| ArgError::InvalidValue {
                name: name.clone(),
                token: token.text().to_string(),
                source,
            }),
            None if !requires_arg => value
                .parse_flag()
                .map_err(|_| ArgError::MissingArgument { name: name.clone() }),
            None => Err(ArgError::MissingArgument { name: name.clone() }),
        };

        match result {
            Ok(()) => {
                debug!(name = %name, value = %value, "Parsed parameter");
                let consumed = usize::from(next.is_some());
                State::Scanning {
                    index: index + 1 + consumed,
                }
            }
            Err(err) => {
                warn!(name = %name, error = %err, "Failed to parse parameter");
                if matches!(err, ArgError::InvalidValue { .. }) {
                    out.emit(
                        "Parsing the parameter failed. Correct options:\n",
                        Style::Warning,
                    );
                }
                HelpPrinter::new(registry, &self.config).print_parameter(&name, out);
                State::Stopped(Outcome::Failed(err))
            }
        }
    }

    /// Completeness check once every token is consumed.
    fn finish(&self, registry: &ParameterRegistry, matched: usize, out: &mut dyn Emitter) -> Outcome {
        let missing = registry.missing_required();
        if !missing.is_empty() {
            debug!(missing = ?missing, "Required parameters not filled");
            out.emit("Missing required parameters:\n", Style::Warning);
            HelpPrinter::new(registry, &self.config).print_missing(out);
            return Outcome::Failed(ArgError::IncompleteRequired {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        if matched == 0 && registry.count_filled(false) == 0 {
            let switch = self.config.primary_switch;
            out.emit(
                &format!(
                    "Run with parameter {switch}{} or {switch}{} to see the options...\n",
                    self.config.help_shorthand, self.config.help_keyword
                ),
                Style::Warning,
            );
        }
        Outcome::Done
    }

    fn lint(&self, registry: &ParameterRegistry) {
        let reserved = self.config.reserved_keywords();
        let switch_chars = self.config.switch_chars();
        for err in validate_registry(registry, &reserved, &switch_chars) {
            warn!(error = %err, "Declaration problem");
        }
    }
}

/// Declared names similar to `name`, strongest tier first, then by name.
fn suggest(registry: &ParameterRegistry, name: &str) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = registry
        .iter()
        .map(|param| Suggestion {
            name: param.name().to_string(),
            similarity: param.name_similarity(name),
        })
        .filter(|s| s.similarity.is_match())
        .collect();
    suggestions.sort_by(|a, b| {
        b.similarity
            .cmp(&a.similarity)
            .then_with(|| a.name.cmp(&b.name))
    });
    suggestions
}
