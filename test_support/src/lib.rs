//! Shared helpers for whichpy tests.
//!
//! Provides throwaway environment directory trees, fake executable scripts,
//! and guards for tests that touch process-global state.

pub mod env_lock;
pub mod exec;
pub mod tree;
pub mod var_guard;
