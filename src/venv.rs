//! Virtual environment creation.
//!
//! Invokes the external `virtualenv` tool resolved from an existing
//! environment and re-resolves the created directory into a *new*
//! [`Environment`]; the base environment is never mutated.
//!
//! Creation temporarily changes the process-wide working directory, so it
//! is **not reentrant**: no other thread in the process may rely on
//! working-directory-relative paths while a creation is in flight.

use crate::env::{self, Environment};
use crate::fsops;
use crate::runner::run_tool;
use crate::workdir::WorkDirGuard;
use anyhow::{Context, Result, anyhow, bail};
use camino::Utf8PathBuf;
use std::path::Path;

/// Logical name of the virtualenv creation tool.
pub const VIRTUALENV_PROGRAM: &str = "virtualenv";

/// Environment variable override for the virtualenv executable.
pub const VIRTUALENV_ENV: &str = "WHICHPY_VIRTUALENV";

/// Determine which virtualenv executable to invoke.
///
/// The [`VIRTUALENV_ENV`] override wins; otherwise the tool is resolved
/// from `base` like any other executable.
fn resolve_virtualenv_program(base: &Environment) -> Result<Utf8PathBuf> {
    if let Some(path) = std::env::var_os(VIRTUALENV_ENV) {
        return Utf8PathBuf::from_path_buf(path.into())
            .map_err(|path| anyhow!("{VIRTUALENV_ENV} is not valid UTF-8: {}", path.display()));
    }
    base.find_executable(VIRTUALENV_PROGRAM).map_err(Into::into)
}

/// Create a new virtualenv at `target` using the tools of `base`.
///
/// The target's parent directory is created when missing. An existing
/// target is an error unless `force` is set, in which case it is removed
/// first. The tool runs with the working directory set to the target's
/// parent, restored on every exit path by a [`WorkDirGuard`].
///
/// Returns the environment resolved from the freshly created directory.
///
/// # Errors
///
/// Fails when the tool cannot be resolved, the target cannot be prepared,
/// the child process fails, or the created directory does not resolve into
/// an environment.
pub fn create(base: &Environment, target: &Path, force: bool) -> Result<Environment> {
    let target = env::absolute_utf8(target)?;
    if target.exists() {
        if force {
            fsops::remove_path(&target)?;
        } else {
            bail!("virtualenv target {target} already exists; pass --force to replace it");
        }
    }
    let parent = target
        .parent()
        .context("virtualenv target has no parent directory")?;
    let name = target
        .file_name()
        .context("virtualenv target has no directory name")?;
    fsops::make_dirs(parent)?;

    let program = resolve_virtualenv_program(base)?;
    {
        // virtualenv expects to run from the directory the environment is
        // created in; the guard restores the working directory even when
        // the child fails.
        let _guard = WorkDirGuard::enter(parent).with_context(|| format!("enter {parent}"))?;
        run_tool(&program, &[name.to_owned()])
            .with_context(|| format!("running {program} {name}"))?;
    }
    Environment::from_env_dir(target.as_std_path()).map_err(Into::into)
}
