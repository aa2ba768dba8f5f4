//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. The base
//! location flags are mutually exclusive: an environment is resolved from an
//! interpreter path, a virtualenv directory, or a named configuration entry,
//! and falls back to the executable running this process when none is given.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Locate Python environments and resolve the executables inside them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Resolve the environment from this Python interpreter.
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["env_dir", "env"]
    )]
    pub interpreter: Option<PathBuf>,

    /// Resolve the environment from this virtualenv directory.
    #[arg(short = 'd', long, value_name = "DIR", conflicts_with = "env")]
    pub env_dir: Option<PathBuf>,

    /// Resolve the named environment from the configuration file.
    #[arg(short, long, value_name = "NAME")]
    pub env: Option<String>,

    /// Additional configuration file paths, searched before the defaults.
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for whichpy.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Print the resolved absolute path of a tool in the environment.
    Which {
        /// Logical name of the tool to resolve (e.g. `pip`).
        #[arg(value_name = "TOOL")]
        tool: String,
    },

    /// Resolve a tool and invoke it, forwarding the remaining arguments.
    Run {
        /// Logical name of the tool to invoke.
        #[arg(value_name = "TOOL")]
        tool: String,

        /// Arguments forwarded verbatim to the tool.
        #[arg(
            value_name = "ARGS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// List the environments declared in the configuration file.
    Envs,

    /// Create a virtualenv at the given directory and print its interpreter.
    Venv {
        /// Directory the new virtualenv is created at.
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Remove an existing directory at the target before creating.
        #[arg(long)]
        force: bool,
    },
}
