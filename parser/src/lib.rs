//! Command-line parsing for paramkit registries.
//!
//! This crate walks a command line against a
//! [`ParameterRegistry`](paramkit_core::ParameterRegistry) declared with
//! `paramkit-core`:
//!
//! - [`ArgumentParser`] fills parameter values and returns a [`ParseReport`]
//!   whose [`Outcome`] says whether the application may proceed.
//! - [`HelpPrinter`] renders full, brief, filtered and missing-parameter help.
//! - [`format_values`] dumps the parsed values as JSON, YAML or a table.
//!
//! Switches start with `/` or `-` (or `--`), and values follow their switch as
//! the next token. `/?` and `/help` print help; `/name ?` prints the details of
//! one parameter. Exiting the process is left to the caller.
//!
//! # Example
//!
//! ```
//! use paramkit_core::{IntBase, Parameter, ParameterRegistry, Transcript};
//! use paramkit_parser::{ArgError, Outcome, parse_args};
//!
//! let mut registry = ParameterRegistry::new();
//! registry
//!     .register(Parameter::int("pdec", IntBase::Decimal).required())
//!     .unwrap();
//!
//! let mut out = Transcript::default();
//! let report = parse_args(&mut registry, &["app", "/pdc", "42"], &mut out);
//! match report.outcome {
//!     Outcome::Failed(err @ ArgError::UnknownParameter { .. }) => {
//!         assert_eq!(err.suggested_names(), vec!["pdec"]);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! assert!(out.text().contains("Similar parameters:"));
//! ```
//!
//! # Features
//!
//! - `clap`: derives `clap::ValueEnum` for [`ValuesFormat`].

mod config;
mod error;
mod help;
mod outcome;
mod output;
mod parser;
mod switch;

use paramkit_core::{Emitter, ParameterRegistry};

pub use config::ParserConfig;
pub use error::{ArgError, OutputError, Suggestion};
pub use help::HelpPrinter;
pub use outcome::{Outcome, ParseReport};
pub use output::{ValueSnapshot, ValuesFormat, format_values, snapshot_values};
pub use parser::ArgumentParser;
pub use switch::{is_switch, strip_prefix};

/// Parses `args` with the default configuration.
pub fn parse_args<S: AsRef<str>>(
    registry: &mut ParameterRegistry,
    args: &[S],
    out: &mut dyn Emitter,
) -> ParseReport {
    ArgumentParser::default().parse(registry, args, out)
}
