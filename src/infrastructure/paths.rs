//! Path handling for content directories and trace output.
//!
//! Resource names come from the manifest, so they are treated as untrusted:
//! only relative paths without `..` components are resolved.

use crate::domain::error::{FolioError, Result};
use std::path::{Component, Path, PathBuf};

/// File name of the OTLP trace export inside the trace directory.
pub const TRACE_FILE_NAME: &str = "folio-otlp.json";

/// Resolves a manifest-relative resource name against the content root.
///
/// # Errors
///
/// Returns [`FolioError::Config`] if `name` is empty, absolute, or escapes the
/// root through a `..` component.
///
/// # Examples
///
/// ```
/// use folio::infrastructure::resolve_resource;
/// use std::path::Path;
///
/// let path = resolve_resource(Path::new("content"), "notes/a.json").unwrap();
/// assert_eq!(path, Path::new("content/notes/a.json"));
/// assert!(resolve_resource(Path::new("content"), "../secret.json").is_err());
/// ```
pub fn resolve_resource(root: &Path, name: &str) -> Result<PathBuf> {
    let relative = Path::new(name.trim_start_matches("./"));

    if name.trim().is_empty() {
        return Err(FolioError::Config("empty resource name".to_string()));
    }

    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(FolioError::Config(format!(
                    "resource name escapes content directory: {name}"
                )))
            }
        }
    }

    Ok(root.join(relative))
}

/// Returns the trace export file inside `dir`.
#[must_use]
pub fn trace_file(dir: &Path) -> PathBuf {
    dir.join(TRACE_FILE_NAME)
}
