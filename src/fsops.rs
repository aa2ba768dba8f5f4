//! Filesystem helpers for environment manipulation.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Create `path` as a directory, creating parents as required.
///
/// Has no effect when the directory already exists.
///
/// # Errors
///
/// Fails when the path exists but is not a directory, or when creation
/// fails.
pub fn make_dirs(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        bail!(
            "cannot create directory {}: it exists but is not a directory",
            path.display()
        );
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}

/// Delete the file or directory at `path`, including any contents.
///
/// Has no effect when the path does not exist.
///
/// # Errors
///
/// Fails when the removal itself fails.
pub fn remove_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {}", path.display()))
    } else if path.exists() {
        fs::remove_file(path).with_context(|| format!("failed to remove file {}", path.display()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::{self, File};
    use test_support::tree::EnvTree;

    #[rstest]
    fn make_dirs_creates_nested_directories() {
        let tree = EnvTree::new();
        make_dirs(tree.path("parent/child")).expect("create");
        assert!(tree.path("parent/child").is_dir());
    }

    #[rstest]
    fn make_dirs_leaves_existing_content_alone() {
        let tree = EnvTree::new();
        tree.create_files(&["mydir/myfile"]);
        make_dirs(tree.path("mydir")).expect("no-op");
        assert!(tree.path("mydir/myfile").is_file());
    }

    #[rstest]
    fn make_dirs_rejects_an_existing_file() {
        let tree = EnvTree::new();
        tree.create_files(&["myfile"]);
        make_dirs(tree.path("myfile")).expect_err("target is a file");
    }

    #[rstest]
    fn remove_path_deletes_files_and_trees() {
        let tree = EnvTree::new();
        tree.create_files(&["dir/a", "dir/sub/b", "plain"]);
        remove_path(tree.path("dir")).expect("remove dir");
        remove_path(tree.path("plain")).expect("remove file");
        assert!(!tree.path("dir").exists());
        assert!(!tree.path("plain").exists());
    }

    #[rstest]
    fn remove_path_ignores_missing_targets() {
        let tree = EnvTree::new();
        remove_path(tree.path("never-created")).expect("no-op");
    }

    #[rstest]
    fn make_dirs_is_idempotent() {
        let tree = EnvTree::new();
        fs::create_dir_all(tree.path("existing")).expect("setup");
        drop(File::create(tree.path("existing/file")).expect("setup file"));
        make_dirs(tree.path("existing")).expect("idempotent");
        assert!(tree.path("existing/file").is_file());
    }
}
