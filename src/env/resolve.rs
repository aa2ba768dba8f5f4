//! Search-root resolution.
//!
//! Derives the ordered list of existing search directories from a base
//! directory and its candidate subdirectory names. Pure filesystem
//! inspection, no mutation.

use super::error::EnvError;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Subdirectories that may hold tools next to an interpreter.
///
/// Both spellings cover case-sensitive and case-insensitive filesystems.
pub(super) const INTERPRETER_SUBDIRS: &[&str] = &["Scripts", "scripts"];

/// Subdirectories that may hold tools inside a virtualenv directory.
///
/// The union of POSIX-style and Windows-style layouts, so one entry point
/// resolves a virtualenv created on either platform.
pub(super) const ENV_DIR_SUBDIRS: &[&str] = &["bin", "Scripts", "scripts"];

/// Resolve the ordered list of existing search directories under `base`.
///
/// The candidate list is the base directory itself followed by each entry of
/// `subdirs` joined onto it, order preserved. Candidates that are not
/// existing directories are dropped.
///
/// # Errors
///
/// Returns [`EnvError::EnvironmentNotFound`] carrying every candidate tried
/// when none of them exists.
pub(super) fn search_roots(
    base: &Utf8Path,
    subdirs: &[&str],
) -> Result<Vec<Utf8PathBuf>, EnvError> {
    let candidates: Vec<Utf8PathBuf> = std::iter::once(base.to_path_buf())
        .chain(subdirs.iter().map(|sub| base.join(sub)))
        .collect();
    let existing: Vec<Utf8PathBuf> = candidates
        .iter()
        .filter(|path| path.is_dir())
        .cloned()
        .collect();
    if existing.is_empty() {
        return Err(EnvError::EnvironmentNotFound {
            searched: candidates,
        });
    }
    debug!(base = %base, roots = ?existing, "resolved search directories");
    Ok(existing)
}
