//! Error types for environment resolution.
//!
//! Every "not found" failure enumerates the full candidate set that was
//! tried; that list is the primary debugging aid for misconfigured
//! installations.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving an environment or looking up executables.
///
/// All failures are terminal: the underlying cause is "this does not exist",
/// which does not resolve by retrying.
#[derive(Debug, Error, Diagnostic)]
pub enum EnvError {
    /// The interpreter path given to a factory does not exist.
    #[error("python interpreter {path} does not exist")]
    #[diagnostic(
        code(whichpy::env::interpreter_not_found),
        help("check the interpreter path for typos or a missing installation")
    )]
    InterpreterNotFound {
        /// The absolute path that was checked.
        path: Utf8PathBuf,
    },

    /// None of the candidate search directories exist.
    #[error(
        "python environment not found; none of these directories exist: {}",
        format_utf8_paths(.searched)
    )]
    #[diagnostic(
        code(whichpy::env::environment_not_found),
        help("the base location contains none of the expected layout markers")
    )]
    EnvironmentNotFound {
        /// Every directory candidate that was tried, in search order.
        searched: Vec<Utf8PathBuf>,
    },

    /// A named tool was not found under any naming pattern in any search
    /// directory.
    #[error(
        "unable to find {name:?}; looked at {}",
        format_utf8_paths(.candidates)
    )]
    #[diagnostic(code(whichpy::env::executable_not_found))]
    ExecutableNotFound {
        /// Logical name of the tool that was requested.
        name: String,
        /// Every path candidate that was tried, in search order.
        candidates: Vec<Utf8PathBuf>,
    },

    /// The path of the executable running this process is unavailable.
    #[error("the executable running this process cannot be identified")]
    #[diagnostic(code(whichpy::env::current_exe_unavailable))]
    CurrentExeUnavailable {
        /// The underlying host error.
        #[source]
        source: std::io::Error,
    },

    /// A path could not be made absolute.
    #[error("cannot resolve {} to an absolute path", .path.display())]
    #[diagnostic(code(whichpy::env::absolutize))]
    Absolutize {
        /// The path that failed to resolve.
        path: PathBuf,
        /// The underlying host error.
        #[source]
        source: std::io::Error,
    },

    /// A path is not valid UTF-8.
    #[error("path {} is not valid UTF-8", .path.display())]
    #[diagnostic(code(whichpy::env::non_utf8_path))]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
}

/// Join paths into a single diagnostic string.
fn format_utf8_paths(paths: &[Utf8PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
