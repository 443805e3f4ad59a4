//! Per-run summaries returned by the installer

use std::path::PathBuf;

use amag_fs::CopyOutcome;
use serde::Serialize;

/// What happened to one managed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Updated,
    /// Already present and not overwritten
    Skipped,
    /// The template to copy from does not exist
    TemplateMissing,
    Removed,
    /// Nothing to remove
    Absent,
}

impl From<CopyOutcome> for Action {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Created => Self::Created,
            CopyOutcome::Updated => Self::Updated,
            CopyOutcome::Skipped => Self::Skipped,
            CopyOutcome::SourceMissing => Self::TemplateMissing,
        }
    }
}

impl From<bool> for Action {
    /// Map the result of a removal.
    fn from(removed: bool) -> Self {
        if removed { Self::Removed } else { Self::Absent }
    }
}

/// Outcome for one component, `GEMINI.md`, or the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    /// `"<kind>/<name>"`, `GEMINI.md` or `.amag/config.json`
    pub label: String,
    pub path: PathBuf,
    pub action: Action,
}

impl ItemOutcome {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, action: Action) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            action,
        }
    }
}

/// Summary of `init`, `update` or `add`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    /// Managed paths found before `init` started
    pub existing: Vec<String>,
    /// `init` stopped because confirmation was declined; nothing was written
    pub cancelled: bool,
    pub items: Vec<ItemOutcome>,
}

impl InstallReport {
    pub fn count(&self, action: Action) -> usize {
        self.items.iter().filter(|i| i.action == action).count()
    }

    pub fn created(&self) -> usize {
        self.count(Action::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(Action::Updated)
    }

    pub fn skipped(&self) -> usize {
        self.count(Action::Skipped)
    }

    /// Items whose template could not be found.
    pub fn missing_templates(&self) -> Vec<&ItemOutcome> {
        self.items
            .iter()
            .filter(|i| i.action == Action::TemplateMissing)
            .collect()
    }
}

/// Summary of `uninstall`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UninstallReport {
    pub items: Vec<ItemOutcome>,
}

impl UninstallReport {
    pub fn removed(&self) -> usize {
        self.items.iter().filter(|i| i.action == Action::Removed).count()
    }

    pub fn absent(&self) -> usize {
        self.items.iter().filter(|i| i.action == Action::Absent).count()
    }
}

/// One line of the `doctor` audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorEntry {
    pub label: String,
    pub path: PathBuf,
    pub installed: bool,
}

/// Read-only installation audit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorReport {
    pub entries: Vec<DoctorEntry>,
}

impl DoctorReport {
    pub fn installed(&self) -> usize {
        self.entries.iter().filter(|e| e.installed).count()
    }

    pub fn missing(&self) -> usize {
        self.total() - self.installed()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn missing_labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.installed)
            .map(|e| e.label.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }
}
