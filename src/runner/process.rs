//! Subprocess invocation for resolved executables.
//!
//! Tool invocation is an explicit two-step contract: resolve the logical
//! name with [`Environment::find_executable`], then run the resulting path,
//! forwarding arguments verbatim and streaming output back to the user.

use crate::env::Environment;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::info;

/// Resolve `tool` in `env` and invoke it with `args`.
///
/// # Errors
///
/// Returns an error when resolution fails, the process cannot be spawned,
/// or it exits with a non-zero status.
pub fn invoke(env: &Environment, tool: &str, args: &[String]) -> Result<()> {
    let program = env.find_executable(tool)?;
    run_tool(&program, args).with_context(|| format!("running {program}"))
}

/// Check if `arg` carries a credential-looking keyword.
fn contains_sensitive_keyword(arg: &str) -> bool {
    let lower = arg.to_lowercase();
    lower.contains("password") || lower.contains("token") || lower.contains("secret")
}

/// Redact the value of a sensitive `key=value` argument for logging.
///
/// pip invocations routinely carry index credentials; the command log keeps
/// the key and drops the value.
pub(crate) fn redact_argument(arg: &str) -> String {
    if contains_sensitive_keyword(arg) {
        arg.split_once('=').map_or_else(
            || "***REDACTED***".to_owned(),
            |(key, _)| format!("{key}=***REDACTED***"),
        )
    } else {
        arg.to_owned()
    }
}

/// Invoke `program` with `args`, streaming its output back to the user.
///
/// Blocks until the child exits; stdout and stderr are forwarded
/// line-by-line on dedicated threads. There is no timeout: a hung child
/// hangs the caller.
///
/// # Errors
///
/// Returns an [`io::Error`] if the process fails to spawn or reports a
/// non-zero exit status.
///
/// # Panics
///
/// Panics if the child's output streams cannot be captured.
pub fn run_tool(program: &Utf8Path, args: &[String]) -> io::Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let redacted: Vec<String> = args.iter().map(|arg| redact_argument(arg)).collect();
    info!("Running command: {} {}", program, redacted.join(" "));

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().expect("child stdout");
    let stderr = child.stderr.take().expect("child stderr");

    let out_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut handle = io::stdout();
        for line in reader.lines().map_while(Result::ok) {
            let _ = writeln!(handle, "{line}");
        }
    });
    let err_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut handle = io::stderr();
        for line in reader.lines().map_while(Result::ok) {
            let _ = writeln!(handle, "{line}");
        }
    });

    let status = child.wait()?;
    let _ = out_handle.join();
    let _ = err_handle.join();

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}
