//! Build throwaway environment directory trees for tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use tempfile::TempDir;

/// A temporary directory populated with an environment-like file layout.
///
/// The directory and everything inside it is removed on drop.
#[derive(Debug)]
pub struct EnvTree {
    dir: TempDir,
}

impl EnvTree {
    /// Create an empty tree.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created or its path is
    /// not valid UTF-8.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        assert!(
            Utf8Path::from_path(dir.path()).is_some(),
            "temp dir path should be UTF-8"
        );
        Self { dir }
    }

    /// Absolute root of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        Utf8Path::from_path(self.dir.path()).expect("temp dir path should be UTF-8")
    }

    /// Absolute path of `rel` within the tree.
    #[must_use]
    pub fn path(&self, rel: &str) -> Utf8PathBuf {
        self.root().join(rel)
    }

    /// Create each listed relative file, creating parent directories as
    /// needed. Files are left empty.
    pub fn create_files(&self, files: &[&str]) {
        for rel in files {
            let path = self.path(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent dirs");
            }
            File::create(&path).expect("create file");
        }
    }

    /// Create a (possibly nested) subdirectory.
    pub fn create_dir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).expect("create dir");
    }
}

impl Default for EnvTree {
    fn default() -> Self {
        Self::new()
    }
}
