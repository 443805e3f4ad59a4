//! Registry/template drift detection
//!
//! Every runtime command trusts the registry blindly, so the registry and
//! the template tree must name exactly the same components. This check runs
//! before packaging (see the `amag-validate-registry` binary) and as a test.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use amag_fs::{AmagPath, Error as FsError};
use serde::Serialize;

use crate::Result;
use crate::registry::{ComponentKind, Registry};

/// Which side of the comparison a key is missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftDirection {
    /// Template exists on disk but no registry entry names it
    Unregistered,
    /// Registry entry has no template on disk
    MissingTemplate,
}

impl DriftDirection {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Unregistered => "exists in templates/ but is NOT registered in the component registry",
            Self::MissingTemplate => "registered in the component registry but template file NOT found on disk",
        }
    }
}

/// One key present on only one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncIssue {
    pub key: String,
    pub direction: DriftDirection,
}

/// Result of comparing a registry with a template tree.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySyncReport {
    /// Unregistered keys first, then missing templates, each sorted by key
    pub issues: Vec<SyncIssue>,
    /// Number of components found on disk
    pub disk_count: usize,
    /// Number of registry entries
    pub registry_count: usize,
}

impl RegistrySyncReport {
    pub fn is_in_sync(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Collect `"<kind>/<name>"` keys for every template on disk.
///
/// Rules and workflows contribute one key per `*.md` file; skills contribute
/// one key per subdirectory that holds a `SKILL.md`. A missing kind
/// directory contributes nothing.
pub fn scan_templates(root: &Path) -> Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();

    for kind in ComponentKind::ALL {
        let dir = root.join(kind.dir_name());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "template directory missing");
                continue;
            }
            Err(e) => return Err(FsError::io(&dir, e).into()),
        };

        for entry in entries {
            let path = entry.map_err(|e| FsError::io(&dir, e))?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            match kind {
                ComponentKind::Rule | ComponentKind::Workflow => {
                    match name.strip_suffix(".md") {
                        Some(stem) if path.is_file() => {
                            keys.insert(format!("{kind}/{stem}"));
                        }
                        _ => {}
                    }
                }
                ComponentKind::Skill => {
                    if path.join(AmagPath::SkillManifest).is_file() {
                        keys.insert(format!("{kind}/{name}"));
                    }
                }
            }
        }
    }

    Ok(keys)
}

/// Compare `registry` against the template tree at `root`.
pub fn check_registry_sync(registry: &Registry, root: &Path) -> Result<RegistrySyncReport> {
    let disk_keys = scan_templates(root)?;
    let registry_keys = registry.keys();

    let unregistered = disk_keys.difference(&registry_keys).map(|key| SyncIssue {
        key: key.clone(),
        direction: DriftDirection::Unregistered,
    });
    let missing = registry_keys.difference(&disk_keys).map(|key| SyncIssue {
        key: key.clone(),
        direction: DriftDirection::MissingTemplate,
    });

    Ok(RegistrySyncReport {
        issues: unregistered.chain(missing).collect(),
        disk_count: disk_keys.len(),
        registry_count: registry_keys.len(),
    })
}
