//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! selects the environment named by the global CLI flags and executes the
//! requested subcommand.

mod process;

pub use process::{invoke, run_tool};

use crate::cli::{Cli, Commands};
use crate::config;
use crate::env::{Environment, PYTHON_PROGRAM};
use crate::venv;
use anyhow::{Context, Result};
use std::io::Write;

/// Execute the parsed [`Cli`] command.
///
/// # Errors
///
/// Returns an error when environment resolution, configuration loading or
/// the invoked child process fails.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Which { tool } => {
            let env = select_environment(cli)?;
            let path = env.find_executable(tool)?;
            writeln!(std::io::stdout(), "{path}").context("write resolved path")?;
            Ok(())
        }
        Commands::Run { tool, args } => {
            let env = select_environment(cli)?;
            process::invoke(&env, tool, args)
        }
        Commands::Envs => {
            let environments = config::load_environments(&cli.config)?;
            let mut out = std::io::stdout();
            for (name, env) in &environments {
                let interpreter = env.find_executable(PYTHON_PROGRAM)?;
                writeln!(out, "{name}\t{interpreter}").context("write environment entry")?;
            }
            Ok(())
        }
        Commands::Venv { dir, force } => {
            let env = select_environment(cli)?;
            let created = venv::create(&env, dir, *force)?;
            let interpreter = created.find_executable(PYTHON_PROGRAM)?;
            writeln!(std::io::stdout(), "{interpreter}").context("write interpreter path")?;
            Ok(())
        }
    }
}

/// Resolve the environment selected by the CLI's base-location flags.
///
/// Falls back to the environment of the executable running this process
/// when no flag is given.
fn select_environment(cli: &Cli) -> Result<Environment> {
    if let Some(exe) = &cli.interpreter {
        return Environment::from_interpreter(exe).map_err(Into::into);
    }
    if let Some(dir) = &cli.env_dir {
        return Environment::from_env_dir(dir).map_err(Into::into);
    }
    if let Some(name) = &cli.env {
        let mut environments = config::load_environments(&cli.config)?;
        return environments
            .shift_remove(name)
            .with_context(|| format!("environment {name:?} is not defined in the configuration"));
    }
    Environment::current().map_err(Into::into)
}
