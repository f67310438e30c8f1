//! Template reference validation and output-path derivation.
//!
//! References and business identifiers are caller-supplied strings that
//! end up in filesystem paths, so both are confined to their roots before
//! any I/O happens: no absolute paths, no `..` components.

use std::path::{Component, Path, PathBuf};

use crate::error::BuildError;

/// Validate a caller-supplied template reference, returning it as a
/// normalized relative path.
pub fn sanitize_reference(reference: &str) -> Result<PathBuf, BuildError> {
    let path = Path::new(reference);
    if reference.is_empty() || path.is_absolute() {
        return Err(BuildError::InvalidPath {
            path: reference.to_string(),
        });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            _ => {
                return Err(BuildError::InvalidPath {
                    path: reference.to_string(),
                })
            }
        }
    }
    Ok(path.to_path_buf())
}

/// Relative output path for a build: the reference's subdirectory is
/// mirrored, and the file name gains the business identifier prefix.
///
/// `acme` + `js/config.js` → `js/acme_config.js`.
pub fn output_reference(business_id: &str, reference: &Path) -> Result<PathBuf, BuildError> {
    let name = reference
        .file_name()
        .ok_or_else(|| BuildError::InvalidPath {
            path: reference.display().to_string(),
        })?;
    let prefixed = format!("{}_{}", business_id, name.to_string_lossy());

    Ok(match reference.parent() {
        Some(dir) if dir != Path::new("") => dir.join(prefixed),
        _ => PathBuf::from(prefixed),
    })
}

/// A business identifier is safe to embed in file names when it carries
/// no path separators and no `..`.
pub fn is_valid_business_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}
