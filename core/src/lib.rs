//! Typed parameter model and registry for command-line tools.
//!
//! This crate defines the declaration side of paramkit:
//!
//! - [`ParameterValue`]: a closed set of value variants (integers in a fixed
//!   base, strings, wide strings, booleans, enums, string and integer lists),
//!   each with its own validation rules.
//! - [`Parameter`]: a named, documented value slot that is required or
//!   optional and active or inactive.
//! - [`ParameterRegistry`]: the owner of all parameters and their display
//!   groups, with typed accessors and completeness queries.
//! - [`ParameterRegistry::describe`]: grouped, filterable listings that are
//!   rendered through an [`Emitter`].
//!
//! Name and keyword matching live in [`similarity`], numeric text helpers in
//! [`numeric`]. [`validate_registry`] lints declarations before parsing.
//!
//! # Example
//!
//! ```
//! use paramkit_core::*;
//!
//! let mut registry = ParameterRegistry::new();
//! registry
//!     .register(
//!         Parameter::int("pdec", IntBase::Decimal)
//!             .required()
//!             .with_info("Sample decimal integer"),
//!     )
//!     .unwrap();
//! registry
//!     .register(
//!         Parameter::enumeration("mode", "scan_mode")
//!             .with_option(0, Some("A"), "all")
//!             .with_option(1, Some("F"), "fast"),
//!     )
//!     .unwrap();
//! registry.add_group("scanning").unwrap();
//! assert!(registry.assign_group("mode", "scanning"));
//!
//! registry.value_mut("mode").unwrap().parse("F").unwrap();
//! assert_eq!(registry.enum_value("mode"), Some(1));
//! assert_eq!(registry.missing_required(), vec!["pdec"]);
//! assert!(validate_registry(&registry, &["help", "?"], &['/', '-']).is_empty());
//! ```

mod describe;
mod error;
mod group;
pub mod numeric;
mod param;
mod registry;
pub mod similarity;
mod style;
mod validate;
mod value;

pub use describe::{
    DescribeOptions, Listing, ListingEntry, ListingGroup, ListingSection, MatchSignal,
    render_entry,
};
pub use error::{DeclarationError, ValueError, ValueResult};
pub use group::ParameterGroup;
pub use param::Parameter;
pub use registry::{GENERAL_GROUP, ParameterRegistry};
pub use similarity::Similarity;
pub use style::{Emitter, PlainEmitter, Style, Transcript};
pub use validate::{ValidationError, validate_parameter, validate_registry};
pub use value::{EnumOption, IntBase, ParameterKind, ParameterValue};
