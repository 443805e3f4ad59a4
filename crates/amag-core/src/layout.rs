//! Source and destination locations for components
//!
//! Templates and installed copies share one relative layout
//! (`<kind dir>/<entry>`); only the root differs. [`TemplateSource`] is
//! rooted at the packaged `templates/` directory and [`ProjectLayout`] at
//! the target project's `.agent/` tree.

use std::path::{Path, PathBuf};

use amag_fs::AmagPath;

use crate::registry::{Component, ComponentKind};
use crate::{Error, Result};

/// Environment variable overriding the templates location.
pub const TEMPLATES_ENV: &str = "AMAG_TEMPLATES_DIR";

const BUNDLED_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Read-only tree of template files shipped with the tool.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `templates/` directory of this crate's source tree.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TEMPLATES)
    }

    /// Find the templates directory for the running binary.
    ///
    /// Search order: `$AMAG_TEMPLATES_DIR`, `templates/` beside the
    /// executable, `../share/amag/templates` relative to it, then the
    /// bundled source tree.
    pub fn locate() -> Result<Self> {
        let mut candidates = Vec::new();

        if let Some(dir) = std::env::var_os(TEMPLATES_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("templates"));
            candidates.push(exe_dir.join("../share/amag/templates"));
        }
        candidates.push(PathBuf::from(BUNDLED_TEMPLATES));

        match candidates.iter().find(|c| c.is_dir()) {
            Some(found) => {
                tracing::debug!(templates = %found.display(), "using templates directory");
                Ok(Self::new(found.clone()))
            }
            None => Err(Error::TemplatesNotFound {
                searched: candidates,
            }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind_dir(&self, kind: ComponentKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Template file for a component (the manifest file for skills).
    pub fn component_path(&self, component: &Component) -> PathBuf {
        self.kind_dir(component.kind)
            .join(component.shape().entry_path())
    }

    /// Template for the project-root `GEMINI.md`.
    pub fn root_context(&self) -> PathBuf {
        self.root.join(AmagPath::RootContext)
    }
}

/// Managed paths inside one target project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Use `root` as-is; callers are expected to pass an absolute path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a `--target` argument against the current directory.
    pub fn resolve(target: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(amag_fs::resolve_project_dir(target)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn agent_dir(&self) -> PathBuf {
        self.root.join(AmagPath::AgentDir)
    }

    pub fn kind_dir(&self, kind: ComponentKind) -> PathBuf {
        self.agent_dir().join(kind.dir_name())
    }

    /// Installed file whose existence means the component is installed.
    pub fn destination(&self, component: &Component) -> PathBuf {
        self.kind_dir(component.kind)
            .join(component.shape().entry_path())
    }

    /// Path deleted when the component is removed.
    pub fn removal_target(&self, component: &Component) -> PathBuf {
        self.kind_dir(component.kind)
            .join(component.shape().removal_path())
    }

    pub fn root_context(&self) -> PathBuf {
        self.root.join(AmagPath::RootContext)
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(AmagPath::StateDir)
    }

    pub fn config_file(&self) -> PathBuf {
        self.state_dir().join(AmagPath::ConfigFile)
    }
}
