//! Component model

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use amag_fs::AmagPath;
use serde::Serialize;

use crate::Error;

/// The three kinds of installable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Always-on behavioral constraint
    Rule,
    /// Slash-command trigger
    Workflow,
    /// On-demand expertise bundle
    Skill,
}

impl ComponentKind {
    /// All kinds, in display order.
    pub const ALL: [ComponentKind; 3] = [Self::Rule, Self::Workflow, Self::Skill];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Workflow => "workflow",
            Self::Skill => "skill",
        }
    }

    /// Directory holding this kind, both under `templates/` and under `.agent/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Rule => "rules",
            Self::Workflow => "workflows",
            Self::Skill => "skills",
        }
    }

    /// Heading used when listing components.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rule => "Rules (always-on)",
            Self::Workflow => "Workflows (slash commands)",
            Self::Skill => "Skills (on-demand)",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::InvalidComponentType {
                kind: s.to_string(),
            })
    }
}

/// On-disk shape of a component, relative to its kind directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentShape {
    /// A single `<name>.md` file
    File { file_name: String },
    /// A `<name>/` directory carrying a fixed manifest file
    Bundle {
        dir_name: String,
        manifest: &'static str,
    },
}

impl ComponentShape {
    /// Path whose existence means "installed".
    pub fn entry_path(&self) -> PathBuf {
        match self {
            Self::File { file_name } => PathBuf::from(file_name),
            Self::Bundle { dir_name, manifest } => PathBuf::from(dir_name).join(manifest),
        }
    }

    /// Path deleted on removal: the file, or the whole bundle directory.
    pub fn removal_path(&self) -> PathBuf {
        match self {
            Self::File { file_name } => PathBuf::from(file_name),
            Self::Bundle { dir_name, .. } => PathBuf::from(dir_name),
        }
    }
}

/// One installable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: &'static str,
    pub description: &'static str,
}

impl Component {
    pub const fn new(kind: ComponentKind, name: &'static str, description: &'static str) -> Self {
        Self {
            kind,
            name,
            description,
        }
    }

    /// `"<kind>/<name>"`, the identity used in reports and drift checks.
    pub fn key(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }

    pub fn shape(&self) -> ComponentShape {
        match self.kind {
            ComponentKind::Rule | ComponentKind::Workflow => ComponentShape::File {
                file_name: format!("{}.md", self.name),
            },
            ComponentKind::Skill => ComponentShape::Bundle {
                dir_name: self.name.to_string(),
                manifest: AmagPath::SkillManifest.as_str(),
            },
        }
    }
}
