//! [`TemplateTree`]: a synthetic `templates/` directory for drift and copy tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a templates directory laid out like the packaged one.
pub struct TemplateTree {
    temp_dir: TempDir,
}

impl Default for TemplateTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateTree {
    /// Create an empty tree with `rules/`, `workflows/` and `skills/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TemplateTree::new: failed to create temp dir");
        for dir in ["rules", "workflows", "skills"] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add `rules/<name>.md`.
    pub fn rule(self, name: &str) -> Self {
        self.file(&format!("rules/{name}.md"), &format!("# rule {name}\n"))
    }

    /// Add `workflows/<name>.md`.
    pub fn workflow(self, name: &str) -> Self {
        self.file(&format!("workflows/{name}.md"), &format!("# workflow {name}\n"))
    }

    /// Add `skills/<name>/SKILL.md`.
    pub fn skill(self, name: &str) -> Self {
        self.file(&format!("skills/{name}/SKILL.md"), &format!("# skill {name}\n"))
    }

    /// Add the root `GEMINI.md` template.
    pub fn root_context(self) -> Self {
        self.file("GEMINI.md", "# context\n")
    }

    /// Add an arbitrary file, creating parent directories.
    pub fn file(self, relative: &str, content: &str) -> Self {
        let path: PathBuf = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TemplateTree::file: {}: {e}", path.display()));
        self
    }
}
