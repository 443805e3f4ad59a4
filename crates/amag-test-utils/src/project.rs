//! [`TestProject`]: a temporary target directory with assertion helpers.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory that installer commands can target.
///
/// # Example
///
/// ```rust,no_run
/// use amag_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.write("GEMINI.md", "custom");
/// project.assert_file_exists("GEMINI.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestProject::new: failed to create temp dir"),
        }
    }

    /// Root of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestProject::write: mkdir {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestProject::write: {}: {e}", path.display()));
    }

    /// Read a file as UTF-8.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestProject::read: {}: {e}", path.display()))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Names of the direct children of the project root, sorted.
    pub fn top_level_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("TestProject::top_level_entries: read_dir failed")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that a file exists.
    ///
    /// # Panics
    /// Panics if the path is missing or not a file.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.is_file(), "expected file to exist: {}", path.display());
    }

    /// Assert that nothing exists at the path.
    ///
    /// # Panics
    /// Panics if the path exists.
    pub fn assert_missing(&self, relative: &str) {
        let path = self.path(relative);
        assert!(!path.exists(), "expected path to be absent: {}", path.display());
    }
}
