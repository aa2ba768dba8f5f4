//! Environment resolution and executable lookup.
//!
//! An [`Environment`] is a resolved set of search directories plus lookup
//! rules for finding named executables within them. It is constructed once
//! by a factory — from an interpreter path, from a virtualenv directory, or
//! from manual configuration — and is read-only afterwards: lookups are
//! idempotent and side-effect free, so sharing an instance across threads
//! is safe by construction.

mod error;
mod naming;
mod resolve;

pub use error::EnvError;
pub use naming::{NamingRule, PYTHON_PROGRAM};

use camino::Utf8PathBuf;
use std::path::Path;
use tracing::debug;

/// A Python environment: an interpreter plus auxiliary tools such as `pip`
/// and `virtualenv`, located through an ordered list of search directories.
///
/// Earlier directories take precedence on name collisions. Each directory
/// existed at resolution time; no lock is held between resolution and use.
#[derive(Debug, Clone)]
pub struct Environment {
    search_paths: Vec<Utf8PathBuf>,
}

impl Environment {
    /// Manually configure an environment from candidate directories.
    ///
    /// Candidates are made absolute and filtered to those that exist as
    /// directories, preserving order. Consider the factory functions
    /// [`Environment::from_interpreter`] and [`Environment::from_env_dir`]
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EnvironmentNotFound`] when none of the candidates
    /// is an existing directory.
    pub fn with_search_paths(candidates: &[&Path]) -> Result<Self, EnvError> {
        let candidates = candidates
            .iter()
            .map(|path| absolute_utf8(path))
            .collect::<Result<Vec<_>, _>>()?;
        let search_paths: Vec<Utf8PathBuf> = candidates
            .iter()
            .filter(|path| path.is_dir())
            .cloned()
            .collect();
        if search_paths.is_empty() {
            return Err(EnvError::EnvironmentNotFound {
                searched: candidates,
            });
        }
        Ok(Self { search_paths })
    }

    /// Construct the environment for a given interpreter by guessing where
    /// the tool directories are relative to it.
    ///
    /// The containing directory of `exe` becomes the base; `Scripts` and
    /// `scripts` subdirectories are searched in addition to the base itself.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InterpreterNotFound`] when `exe` does not exist,
    /// or [`EnvError::EnvironmentNotFound`] when no search directory can be
    /// derived from it.
    pub fn from_interpreter(exe: &Path) -> Result<Self, EnvError> {
        let exe = absolute_utf8(exe)?;
        if !exe.exists() {
            return Err(EnvError::InterpreterNotFound { path: exe });
        }
        let base = exe
            .parent()
            .ok_or_else(|| EnvError::InterpreterNotFound { path: exe.clone() })?;
        let search_paths = resolve::search_roots(base, resolve::INTERPRETER_SUBDIRS)?;
        Ok(Self { search_paths })
    }

    /// Construct the environment from a directory created by `virtualenv`.
    ///
    /// The directory itself is the base; `bin`, `Scripts` and `scripts`
    /// subdirectories are searched in addition, covering both POSIX-style
    /// and Windows-style layouts.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EnvironmentNotFound`] — carrying every candidate
    /// tried — when neither `dir` nor any expected subdirectory exists.
    pub fn from_env_dir(dir: &Path) -> Result<Self, EnvError> {
        let dir = absolute_utf8(dir)?;
        let search_paths = resolve::search_roots(&dir, resolve::ENV_DIR_SUBDIRS)?;
        Ok(Self { search_paths })
    }

    /// Construct the environment of the executable running this process.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::CurrentExeUnavailable`] when the host cannot
    /// report the current executable path, or any error from
    /// [`Environment::from_interpreter`].
    pub fn current() -> Result<Self, EnvError> {
        let exe = std::env::current_exe()
            .map_err(|source| EnvError::CurrentExeUnavailable { source })?;
        Self::from_interpreter(&exe)
    }

    /// Ordered search directories, earliest first.
    #[must_use]
    pub fn search_paths(&self) -> &[Utf8PathBuf] {
        &self.search_paths
    }

    /// Find an executable with the given logical name in this environment.
    ///
    /// Candidates are generated as the outer product in directory-major
    /// order: every filename pattern is tried within a search directory
    /// before the next directory is considered, so directory priority
    /// dominates pattern priority. The first candidate that exists as a
    /// file wins.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ExecutableNotFound`] carrying the full candidate
    /// list when no candidate exists.
    pub fn find_executable(&self, name: &str) -> Result<Utf8PathBuf, EnvError> {
        let filenames = NamingRule::for_tool(name).candidates(name);
        let mut tried = Vec::with_capacity(self.search_paths.len() * filenames.len());
        for dir in &self.search_paths {
            for filename in &filenames {
                let candidate = dir.join(filename);
                if candidate.is_file() {
                    debug!(tool = name, path = %candidate, "resolved executable");
                    return Ok(candidate);
                }
                tried.push(candidate);
            }
        }
        Err(EnvError::ExecutableNotFound {
            name: name.to_owned(),
            candidates: tried,
        })
    }
}

/// Convert a possibly relative path into an absolute UTF-8 path.
///
/// Does not resolve symlinks; relative paths are joined onto the current
/// working directory.
pub(crate) fn absolute_utf8(path: &Path) -> Result<Utf8PathBuf, EnvError> {
    let abs = std::path::absolute(path).map_err(|source| EnvError::Absolutize {
        path: path.to_path_buf(),
        source,
    })?;
    Utf8PathBuf::from_path_buf(abs).map_err(|path| EnvError::NonUtf8Path { path })
}
