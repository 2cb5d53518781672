//! Destination file resolution.
//!
//! One entry point decides, per destination, whether to write fresh content
//! or verify the existing copy. The read-only permission bit selects
//! comparison semantics; everything else is replaced wholesale.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CodegenError;
use crate::templates::Template;
use crate::vars::TemplateVars;

/// How a run was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Materialize outputs.
    Generate,
    /// Verify checked-in outputs.
    CheckOnly,
}

/// What happened to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Fresh content was written to the destination.
    Written,
    /// A read-only destination already held the generated content.
    Unchanged,
    /// A read-only destination differs from the generated content.
    Mismatch {
        /// The protected destination.
        dest: PathBuf,
        /// Sibling file now holding the fresh content.
        new_path: PathBuf,
    },
}

/// Renders `template` with `vars` and settles the destination.
///
/// An absent destination is created, parents included. A writable
/// destination is overwritten wholesale, even under [`Mode::CheckOnly`];
/// only the read-only permission bit opts a destination into comparison
/// semantics. A read-only destination is byte-compared: on a mismatch the
/// fresh content lands in a `.new` sibling and the outcome reports both
/// paths.
pub fn resolve(
    template: &Template,
    dest: &Path,
    vars: &dyn TemplateVars,
    mode: Mode,
) -> Result<FileOutcome, CodegenError> {
    let rendered = template.render(vars)?;
    debug!(?mode, dest = %dest.display(), "resolving destination");

    let metadata = match fs::metadata(dest) {
        Ok(metadata) => metadata,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            write_destination(dest, &rendered)?;
            return Ok(FileOutcome::Written);
        }
        Err(source) => {
            return Err(CodegenError::DestinationRead {
                path: dest.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.permissions().readonly() {
        write_destination(dest, &rendered)?;
        return Ok(FileOutcome::Written);
    }

    let existing = fs::read(dest).map_err(|source| CodegenError::DestinationRead {
        path: dest.to_path_buf(),
        source,
    })?;
    if existing == rendered.as_bytes() {
        return Ok(FileOutcome::Unchanged);
    }

    let new_path = new_sibling(dest);
    write_destination(&new_path, &rendered)?;
    Ok(FileOutcome::Mismatch {
        dest: dest.to_path_buf(),
        new_path,
    })
}

fn write_destination(dest: &Path, content: &str) -> Result<(), CodegenError> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::DestinationWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(dest, content).map_err(|source| CodegenError::DestinationWrite {
        path: dest.to_path_buf(),
        source,
    })
}

/// Appends `.new`, keeping the original extension, `metric3.rs.new`.
fn new_sibling(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".new");
    PathBuf::from(name)
}
