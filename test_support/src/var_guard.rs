//! Override and restore environment variables in tests.

use crate::env_lock::EnvLock;
use std::ffi::{OsStr, OsString};

/// Guard that restores an environment variable to its prior value on drop.
///
/// Holding the guard keeps the override in place; dropping it restores the
/// previous value, cleaning up global state even if a test panics.
#[derive(Debug)]
pub struct VarGuard {
    key: &'static str,
    original: Option<OsString>,
}

/// Set `key` to `value`, returning a guard that restores the previous value.
///
/// Mutating the process environment is `unsafe` in Rust 2024; [`EnvLock`]
/// serialises the mutation and the guard rolls it back on drop.
pub fn set_var_guarded(key: &'static str, value: &OsStr) -> VarGuard {
    let original = std::env::var_os(key);
    let _lock = EnvLock::acquire();
    // SAFETY: `EnvLock` serialises mutations and the guard restores on drop.
    unsafe { std::env::set_var(key, value) };
    VarGuard { key, original }
}

impl Drop for VarGuard {
    fn drop(&mut self) {
        let _lock = EnvLock::acquire();
        // SAFETY: `EnvLock` serialises mutations while the variable is reset.
        unsafe {
            match self.original.take() {
                Some(val) => std::env::set_var(self.key, val),
                None => std::env::remove_var(self.key),
            }
        }
    }
}
