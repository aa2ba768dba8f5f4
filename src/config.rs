//! Configuration file discovery and parsing.
//!
//! The configuration is a UTF-8 JSON file holding a flat object that maps
//! logical environment names to interpreter paths. It is looked up in a
//! fixed order — caller-supplied paths, the current directory, the home
//! directory, then a system-wide location — and the first existing file
//! wins.

use crate::env::{EnvError, Environment};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name the configuration is looked up under.
pub const CONFIG_FILE_NAME: &str = "whichpy.json";

/// Errors raised during configuration discovery, parsing or resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// No configuration file exists at any searched location.
    #[error("no configuration file found; searched {}", format_paths(.searched))]
    #[diagnostic(
        code(whichpy::config::not_found),
        help("create a whichpy.json mapping environment names to interpreter paths")
    )]
    NotFound {
        /// Every location that was searched, in priority order.
        searched: Vec<PathBuf>,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file {}", .path.display())]
    #[diagnostic(code(whichpy::config::read))]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not a flat JSON object of name to interpreter
    /// path.
    #[error("invalid configuration in {}: {detail}", .path.display())]
    #[diagnostic(
        code(whichpy::config::invalid),
        help("the file must contain a single JSON object of string values")
    )]
    Invalid {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser detail describing the mismatch.
        detail: String,
    },

    /// A configuration entry failed to resolve into an environment.
    ///
    /// One broken entry aborts the whole load; a misconfigured entry likely
    /// indicates broader misconfiguration, so no partial result is returned.
    #[error("failed to resolve environment {name:?}")]
    #[diagnostic(code(whichpy::config::environment))]
    Environment {
        /// Name of the entry that failed.
        name: String,
        /// The underlying resolution error.
        #[source]
        source: EnvError,
    },
}

/// Join paths into a single diagnostic string.
fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flat name-to-interpreter mapping, order preserved from the file.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct ConfigFile {
    environments: IndexMap<String, String>,
}

/// System-wide fallback location for the configuration file.
fn system_location() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(format!("C:\\{CONFIG_FILE_NAME}"))
    } else {
        Path::new("/etc").join(CONFIG_FILE_NAME)
    }
}

/// Candidate configuration locations, in priority order.
fn candidate_locations(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut locations: Vec<PathBuf> = extra.to_vec();
    locations.push(PathBuf::from(CONFIG_FILE_NAME));
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(CONFIG_FILE_NAME));
    }
    locations.push(system_location());
    locations
}

/// Find the first existing configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] listing every searched location when no
/// file exists.
pub fn discover(extra: &[PathBuf]) -> Result<PathBuf, ConfigError> {
    let searched = candidate_locations(extra);
    for path in &searched {
        if path.is_file() {
            return Ok(path.clone());
        }
    }
    Err(ConfigError::NotFound { searched })
}

/// Load every environment declared in the configuration file.
///
/// Each entry resolves through [`Environment::from_interpreter`]. The
/// returned map preserves the file's entry order.
///
/// # Errors
///
/// Fails when no configuration file exists, the file is not a flat JSON
/// object of strings, or any single entry fails to resolve (fail-fast, no
/// partial results).
pub fn load_environments(
    extra: &[PathBuf],
) -> Result<IndexMap<String, Environment>, ConfigError> {
    let path = discover(extra)?;
    debug!(path = %path.display(), "loading configuration");
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let file: ConfigFile = serde_json::from_str(&text).map_err(|err| ConfigError::Invalid {
        path: path.clone(),
        detail: err.to_string(),
    })?;
    let mut environments = IndexMap::with_capacity(file.environments.len());
    for (name, interpreter) in file.environments {
        let env = Environment::from_interpreter(Path::new(&interpreter)).map_err(|source| {
            ConfigError::Environment {
                name: name.clone(),
                source,
            }
        })?;
        environments.insert(name, env);
    }
    Ok(environments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use test_support::tree::EnvTree;

    fn write_config(tree: &EnvTree, body: &str) -> PathBuf {
        let path = tree.path(CONFIG_FILE_NAME);
        fs::write(&path, body).expect("write config");
        path.into_std_path_buf()
    }

    #[rstest]
    fn loads_environments_in_file_order() {
        let tree = EnvTree::new();
        tree.create_files(&["one/bin/python", "two/python.exe"]);
        let config = write_config(
            &tree,
            &format!(
                "{{\"one\": \"{}\", \"two\": \"{}\"}}",
                tree.path("one/bin/python"),
                tree.path("two/python.exe"),
            ),
        );
        let environments = load_environments(&[config]).expect("load");
        let names: Vec<&String> = environments.keys().collect();
        assert_eq!(names, ["one", "two"]);
        let two = environments.get("two").expect("entry");
        assert_eq!(
            two.find_executable("python").expect("python"),
            tree.path("two/python.exe")
        );
    }

    #[rstest]
    fn extra_paths_take_priority() {
        let tree = EnvTree::new();
        tree.create_files(&["env/bin/python"]);
        let config = write_config(
            &tree,
            &format!("{{\"only\": \"{}\"}}", tree.path("env/bin/python")),
        );
        let found = discover(&[config.clone()]).expect("discover");
        assert_eq!(found, config);
    }

    #[rstest]
    fn missing_configuration_lists_searched_locations() {
        let tree = EnvTree::new();
        let missing = tree.path("absent.json").into_std_path_buf();
        let err = load_environments(&[missing.clone()]).expect_err("no config anywhere");
        let ConfigError::NotFound { searched } = err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(searched.first(), Some(&missing));
        assert!(searched.len() >= 3);
    }

    #[rstest]
    #[case::array("[1, 2, 3]")]
    #[case::scalar("\"just a string\"")]
    #[case::nested_value("{\"name\": {\"interpreter\": \"/usr/bin/python\"}}")]
    #[case::syntax_error("{\"name\": ")]
    fn non_mapping_configuration_is_invalid(#[case] body: &str) {
        let tree = EnvTree::new();
        let config = write_config(&tree, body);
        let err = load_environments(&[config]).expect_err("invalid config");
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[rstest]
    fn broken_entry_aborts_the_whole_load() {
        let tree = EnvTree::new();
        tree.create_files(&["good/bin/python"]);
        let config = write_config(
            &tree,
            &format!(
                "{{\"good\": \"{}\", \"bad\": \"{}\"}}",
                tree.path("good/bin/python"),
                tree.path("missing/bin/python"),
            ),
        );
        let err = load_environments(&[config]).expect_err("fail fast");
        let ConfigError::Environment { name, .. } = err else {
            panic!("expected Environment, got {err:?}");
        };
        assert_eq!(name, "bad");
    }
}
