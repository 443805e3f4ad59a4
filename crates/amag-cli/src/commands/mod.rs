//! Command implementations for amag-cli

pub mod component;
pub mod config;
pub mod doctor;
pub mod init;
pub mod list;
pub mod uninstall;
pub mod update;

pub use component::{run_add, run_remove};
pub use config::{run_config_reset, run_config_set, run_config_show};
pub use doctor::run_doctor;
pub use init::run_init;
pub use list::run_list;
pub use uninstall::run_uninstall;
pub use update::run_update;

use std::path::Path;

use amag_core::{Action, InstallReport, Installer, ItemOutcome, ProjectLayout, Registry, TemplateSource};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Installer for commands that copy templates.
pub(crate) fn installer_for<'a>(registry: &'a Registry, target: &Path) -> Result<Installer<'a>> {
    let project = ProjectLayout::resolve(target)?;
    let templates = TemplateSource::locate()?;
    Ok(Installer::new(registry, templates, project))
}

/// Installer for commands that only inspect or delete project files.
pub(crate) fn project_installer<'a>(registry: &'a Registry, target: &Path) -> Result<Installer<'a>> {
    let project = ProjectLayout::resolve(target)?;
    // templates are never read on this path
    let templates = TemplateSource::locate().unwrap_or_else(|_| TemplateSource::bundled());
    Ok(Installer::new(registry, templates, project))
}

/// Print one status line for an installed or removed item.
pub(crate) fn print_outcome(item: &ItemOutcome) {
    match item.action {
        Action::Created => println!("   {} {}", "OK".green().bold(), item.label),
        Action::Updated => println!("   {} {} {}", "OK".green().bold(), item.label, "(updated)".dimmed()),
        Action::Skipped => println!(
            "   {} {} already exists, skipping",
            "WARN".yellow().bold(),
            item.label
        ),
        Action::TemplateMissing => println!(
            "   {} {} template not found, skipping",
            "ERR".red().bold(),
            item.label
        ),
        Action::Removed => println!("   {} Removed {}", "OK".green().bold(), item.label),
        Action::Absent => println!(
            "   {} {} not installed, skipping",
            "WARN".yellow().bold(),
            item.label
        ),
    }
}

/// Turn missing templates into a failing exit status once the run is done.
pub(crate) fn fail_on_missing_templates(report: &InstallReport) -> Result<()> {
    let missing = report.missing_templates();
    if missing.is_empty() {
        return Ok(());
    }
    let labels: Vec<&str> = missing.iter().map(|i| i.label.as_str()).collect();
    Err(CliError::user(format!(
        "{} template(s) missing: {}",
        labels.len(),
        labels.join(", ")
    )))
}
