//! The generation driver.
//!
//! Walks every dimensionality in ascending order, resolves each applicable
//! category destination, accumulates aggregate fragments along the way, and
//! emits the aggregate destinations once the loop completes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::categories::{AggregateCategory, AGGREGATES, CATEGORIES};
use crate::error::CodegenError;
use crate::expansion::{expand, GENERATOR_ID, MAX_DIMENSIONALITY};
use crate::resolve::{resolve, FileOutcome, Mode};
use crate::templates::Template;
use crate::vars::{FactoryVars, TemplateVars};

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the category templates.
    pub template_dir: PathBuf,
    /// Directory destinations are resolved under.
    pub out_dir: PathBuf,
    /// Highest dimensionality to generate, starting from 1.
    pub max_dimensionality: u32,
    /// Whether the run materializes or verifies outputs.
    pub mode: Mode,
}

/// Destination counts from a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Destinations that received fresh content.
    pub written: usize,
    /// Read-only destinations that already matched.
    pub unchanged: usize,
}

struct AggregateState<'a> {
    aggregate: &'a AggregateCategory,
    template: Template,
    fragment: Template,
    methods: String,
}

/// Runs the generator to completion.
///
/// The dimensionality bound is validated and every template is loaded before
/// any destination is touched. The first consistency mismatch terminates the
/// run; destinations resolved earlier keep whatever the protocol did to
/// them, which is safe because a rerun regenerates deterministically.
pub fn run(config: &GeneratorConfig) -> Result<RunSummary, CodegenError> {
    if config.max_dimensionality < 1 || config.max_dimensionality > MAX_DIMENSIONALITY {
        return Err(CodegenError::DimensionalityOutOfRange {
            dimensionality: config.max_dimensionality,
            max: MAX_DIMENSIONALITY,
        });
    }

    let mut category_templates = Vec::with_capacity(CATEGORIES.len());
    for category in &CATEGORIES {
        let path = config.template_dir.join(category.template_file_name());
        category_templates.push((category, Template::load(path)?));
    }

    let mut aggregates = Vec::with_capacity(AGGREGATES.len());
    for aggregate in &AGGREGATES {
        let template = Template::load(config.template_dir.join(aggregate.template_file_name()))?;
        let fragment = Template::load(config.template_dir.join(aggregate.fragment_file_name()))?;
        aggregates.push(AggregateState {
            aggregate,
            template,
            fragment,
            methods: String::new(),
        });
    }

    let mut summary = RunSummary::default();
    for dimensionality in 1..=config.max_dimensionality {
        let vars = expand(dimensionality)?;

        for (category, template) in &category_templates {
            if !category.applies_to(dimensionality) {
                continue;
            }
            let dest = config.out_dir.join(category.dest_file_name(dimensionality));
            emit(&mut summary, template, &dest, &vars, config.mode)?;
        }

        for state in &mut aggregates {
            state.methods.push_str(&state.fragment.render(&vars)?);
        }
    }

    for state in &aggregates {
        let vars = FactoryVars {
            generator: GENERATOR_ID.to_string(),
            factory_methods: state.methods.clone(),
        };
        let dest = config.out_dir.join(state.aggregate.dest_file_name());
        emit(&mut summary, &state.template, &dest, &vars, config.mode)?;
    }

    Ok(summary)
}

fn emit(
    summary: &mut RunSummary,
    template: &Template,
    dest: &Path,
    vars: &dyn TemplateVars,
    mode: Mode,
) -> Result<(), CodegenError> {
    match resolve(template, dest, vars, mode)? {
        FileOutcome::Written => {
            info!(
                template = %template.path().display(),
                dest = %dest.display(),
                "wrote destination"
            );
            summary.written += 1;
        }
        FileOutcome::Unchanged => {
            info!(dest = %dest.display(), "destination is up to date");
            summary.unchanged += 1;
        }
        FileOutcome::Mismatch { dest, new_path } => {
            error!(
                dest = %dest.display(),
                new = %new_path.display(),
                "generated content differs from the checked-in copy"
            );
            return Err(CodegenError::ConsistencyMismatch { dest, new_path });
        }
    }
    Ok(())
}
