//! Install reconciliation
//!
//! The [`Installer`] walks the registry in order and asks the reconciler
//! primitives to converge each component's destination. Nothing is cached:
//! every command probes the filesystem again, so an interrupted run is
//! repaired by running the same command once more.

mod report;

pub use report::{Action, DoctorEntry, DoctorReport, InstallReport, ItemOutcome, UninstallReport};

use std::collections::BTreeSet;
use std::path::PathBuf;

use amag_fs::{AmagPath, copy_if_absent_or_forced, prune_empty_ancestors, remove_if_present};

use crate::config::{AmagConfig, ConfigStore};
use crate::layout::{ProjectLayout, TemplateSource};
use crate::registry::{Component, Registry};
use crate::{Error, Result};

/// Options for [`Installer::init`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Do not install `GEMINI.md`
    pub skip_root_context: bool,
    /// Skip confirmation and rewrite the config with defaults. Existing
    /// components and `GEMINI.md` are still kept.
    pub force: bool,
}

/// Options for [`Installer::update`].
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Do not install or refresh `GEMINI.md`
    pub skip_root_context: bool,
}

/// Options for [`Installer::uninstall`].
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    /// Leave `GEMINI.md` in place
    pub keep_root_context: bool,
}

/// Applies registry components to one target project.
#[derive(Debug)]
pub struct Installer<'a> {
    registry: &'a Registry,
    templates: TemplateSource,
    project: ProjectLayout,
}

impl<'a> Installer<'a> {
    pub fn new(registry: &'a Registry, templates: TemplateSource, project: ProjectLayout) -> Self {
        Self {
            registry,
            templates,
            project,
        }
    }

    pub fn project(&self) -> &ProjectLayout {
        &self.project
    }

    fn config_store(&self) -> ConfigStore {
        ConfigStore::for_project(&self.project)
    }

    /// Labels of every managed path that already exists.
    pub fn existing_artifacts(&self) -> Vec<String> {
        let mut existing: Vec<String> = self
            .registry
            .iter()
            .filter(|c| self.project.destination(c).exists())
            .map(Component::key)
            .collect();

        if self.project.root_context().exists() {
            existing.push(root_context_label());
        }
        if self.project.config_file().exists() {
            existing.push(config_label());
        }
        existing
    }

    /// Install everything, keeping files that already exist.
    ///
    /// When existing files are found and `force` is off, `confirm` receives
    /// their labels; returning `false` cancels the run before anything is
    /// written. Confirmation only decides whether to proceed: existing
    /// component files and `GEMINI.md` are always skipped.
    pub fn init<E, F>(&self, options: &InitOptions, confirm: F) -> std::result::Result<InstallReport, E>
    where
        F: FnOnce(&[String]) -> std::result::Result<bool, E>,
        E: From<Error>,
    {
        let mut report = InstallReport::default();

        if !options.force {
            report.existing = self.existing_artifacts();
            if !report.existing.is_empty() && !confirm(&report.existing)? {
                tracing::debug!(existing = report.existing.len(), "init cancelled");
                report.cancelled = true;
                return Ok(report);
            }
        }

        for component in self.registry.iter() {
            report.items.push(self.install_component(component, false)?);
        }

        if !options.skip_root_context {
            report.items.push(self.install_root_context(false)?);
        }

        let store = self.config_store();
        let config_action = if options.force || !store.exists() {
            let existed = store.exists();
            store.write(&AmagConfig::default())?;
            if existed { Action::Updated } else { Action::Created }
        } else {
            Action::Skipped
        };
        report
            .items
            .push(ItemOutcome::new(config_label(), store.path(), config_action));

        Ok(report)
    }

    /// [`init`](Self::init) without a confirmation step.
    pub fn init_unattended(&self, options: &InitOptions) -> Result<InstallReport> {
        self.init(options, |_| Ok(true))
    }

    /// Overwrite every component with the current templates.
    ///
    /// An existing config is re-read and written back, which keeps user
    /// overrides and fills in fields added to the defaults since.
    pub fn update(&self, options: &UpdateOptions) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        for component in self.registry.iter() {
            report.items.push(self.install_component(component, true)?);
        }

        if !options.skip_root_context {
            report.items.push(self.install_root_context(true)?);
        }

        let store = self.config_store();
        let config_action = if store.exists() {
            store.write(&store.read())?;
            Action::Updated
        } else {
            store.write(&AmagConfig::default())?;
            Action::Created
        };
        report
            .items
            .push(ItemOutcome::new(config_label(), store.path(), config_action));

        Ok(report)
    }

    /// Install a single component, keeping it if already present.
    pub fn add(&self, kind: &str, name: &str) -> Result<ItemOutcome> {
        let component = self.registry.lookup(kind, name)?;
        self.install_component(component, false)
    }

    /// Remove a single component and prune directories left empty.
    pub fn remove(&self, kind: &str, name: &str) -> Result<ItemOutcome> {
        let component = self.registry.lookup(kind, name)?;
        let outcome = self.remove_component(component)?;
        prune_empty_ancestors(&self.project.kind_dir(component.kind), self.project.root());
        Ok(outcome)
    }

    /// Remove every managed path and prune emptied directories below the
    /// project root.
    pub fn uninstall(&self, options: &UninstallOptions) -> Result<UninstallReport> {
        let mut report = UninstallReport::default();

        for component in self.registry.iter() {
            report.items.push(self.remove_component(component)?);
        }

        let kind_dirs: BTreeSet<PathBuf> = self
            .registry
            .iter()
            .map(|c| self.project.kind_dir(c.kind))
            .collect();
        for dir in &kind_dirs {
            prune_empty_ancestors(dir, self.project.root());
        }

        if !options.keep_root_context {
            let path = self.project.root_context();
            let removed = remove_if_present(&path)?;
            report
                .items
                .push(ItemOutcome::new(root_context_label(), path, removed.into()));
        }

        let config = self.project.config_file();
        let removed = remove_if_present(&config)?;
        report
            .items
            .push(ItemOutcome::new(config_label(), config, removed.into()));
        prune_empty_ancestors(&self.project.state_dir(), self.project.root());

        Ok(report)
    }

    /// Report which managed paths exist. Writes nothing.
    pub fn doctor(&self) -> DoctorReport {
        let entry = |label: String, path: PathBuf| DoctorEntry {
            installed: path.exists(),
            label,
            path,
        };

        let mut entries = vec![entry(root_context_label(), self.project.root_context())];
        entries.extend(
            self.registry
                .iter()
                .map(|c| entry(c.key(), self.project.destination(c))),
        );
        entries.push(entry(config_label(), self.project.config_file()));

        DoctorReport { entries }
    }

    fn install_component(&self, component: &Component, force: bool) -> Result<ItemOutcome> {
        let src = self.templates.component_path(component);
        let dest = self.project.destination(component);
        let outcome = copy_if_absent_or_forced(&src, &dest, force)?;
        if !outcome.wrote() {
            tracing::debug!(component = %component.key(), ?outcome, "component not written");
        }
        Ok(ItemOutcome::new(component.key(), dest, outcome.into()))
    }

    fn install_root_context(&self, force: bool) -> Result<ItemOutcome> {
        let dest = self.project.root_context();
        let outcome = copy_if_absent_or_forced(&self.templates.root_context(), &dest, force)?;
        Ok(ItemOutcome::new(root_context_label(), dest, outcome.into()))
    }

    fn remove_component(&self, component: &Component) -> Result<ItemOutcome> {
        let target = self.project.removal_target(component);
        let removed = remove_if_present(&target)?;
        Ok(ItemOutcome::new(component.key(), target, removed.into()))
    }
}

fn root_context_label() -> String {
    AmagPath::RootContext.to_string()
}

fn config_label() -> String {
    format!("{}/{}", AmagPath::StateDir, AmagPath::ConfigFile)
}
