//! whichpy core library.
//!
//! Locates Python environments — an interpreter plus auxiliary tools such as
//! `pip` and `virtualenv` — and resolves named executables inside them using
//! an ordered list of search directories and platform naming conventions.

pub mod cli;
pub mod config;
pub mod env;
pub mod fsops;
pub mod runner;
pub mod venv;
pub mod workdir;
