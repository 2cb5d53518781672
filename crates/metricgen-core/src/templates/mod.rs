//! Template loading and rendering.

pub mod engine;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CodegenError;
use crate::vars::TemplateVars;

/// A loaded template, tagged with its source path for diagnostics.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    content: String,
}

impl Template {
    /// Reads a template from disk.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CodegenError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| CodegenError::TemplateRead {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, content })
    }

    /// Builds a template from in-memory content.
    ///
    /// The path is only used to label diagnostics; nothing is read from it.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path this template is labeled with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw template text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Substitutes every placeholder from `vars` into the template text.
    pub fn render(&self, vars: &dyn TemplateVars) -> Result<String, CodegenError> {
        engine::substitute(self, vars)
    }
}
