//! Error types for the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while expanding dimensions, rendering templates, or
/// resolving destination files.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Requested dimensionality is outside the word tables.
    #[error("dimensionality {dimensionality} is out of range (expected 1..={max})")]
    DimensionalityOutOfRange {
        /// The rejected dimensionality.
        dimensionality: u32,
        /// Largest dimensionality the tables support.
        max: u32,
    },

    /// Template references a placeholder the variable record does not define.
    #[error("unknown placeholder `{name}` in template {}", template.display())]
    UnknownPlaceholder {
        /// Template the placeholder appeared in.
        template: PathBuf,
        /// The unresolvable placeholder name.
        name: String,
    },

    /// An opening `{{` with no matching `}}` before the end of the template.
    #[error("unterminated placeholder in template {}", template.display())]
    UnterminatedPlaceholder {
        /// Template the dangling delimiter appeared in.
        template: PathBuf,
    },

    /// Template file could not be read.
    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        /// Path of the unreadable template.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Existing destination file could not be read for comparison.
    #[error("failed to read destination {}: {source}", path.display())]
    DestinationRead {
        /// Path of the unreadable destination.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Destination file or its parent directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    DestinationWrite {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A read-only destination does not match the freshly generated content.
    #[error(
        "generated content for {} differs from the checked-in copy; fresh output written to {}",
        dest.display(),
        new_path.display()
    )]
    ConsistencyMismatch {
        /// The protected destination that is out of date.
        dest: PathBuf,
        /// Sibling file holding the freshly generated content.
        new_path: PathBuf,
    },
}
