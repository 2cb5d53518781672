#![warn(missing_docs)]

//! Dimensionality-expanded source generation for the typed-field metrics
//! library.
//!
//! The crate expands a substitution record per dimensionality from fixed
//! word tables, renders the category templates with it, and settles each
//! destination with write-or-check semantics, so the same driver serves
//! both generation and presubmit verification of checked-in outputs.

pub mod categories;
pub mod error;
pub mod expansion;
pub mod generator;
pub mod resolve;
pub mod templates;
pub mod vars;

// Re-export public API
pub use categories::{
    AggregateCategory, MetricCategory, AGGREGATES, CATEGORIES, DEPRECATED_CEILING,
};
pub use error::CodegenError;
pub use expansion::{
    expand, CARDINALS, ERASED_FIELD_TYPE, GENERATOR_ID, MAX_DIMENSIONALITY, ORDINALS,
};
pub use generator::{run, GeneratorConfig, RunSummary};
pub use resolve::{resolve, FileOutcome, Mode};
pub use templates::Template;
pub use vars::{FactoryVars, MetricVars, TemplateVars};
