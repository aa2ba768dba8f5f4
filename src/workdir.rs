//! Scoped working-directory changes.
//!
//! The working directory is process-global state. Operations built on
//! [`WorkDirGuard`] are therefore non-reentrant: no other thread in the
//! process may rely on working-directory-relative paths while a guard is
//! held.

use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// RAII guard that switches the process working directory and restores the
/// previous one on drop — on every exit path, including panics.
#[derive(Debug)]
pub struct WorkDirGuard {
    original: PathBuf,
}

impl WorkDirGuard {
    /// Record the current directory and change into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the current directory cannot be read or `dir`
    /// cannot be entered.
    pub fn enter(dir: impl AsRef<Path>) -> io::Result<Self> {
        let original = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        Ok(Self { original })
    }

    /// The directory that will be restored on drop.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkDirGuard {
    fn drop(&mut self) {
        if let Err(err) = std::env::set_current_dir(&self.original) {
            warn!(
                directory = %self.original.display(),
                error = %err,
                "failed to restore working directory"
            );
        }
    }
}
