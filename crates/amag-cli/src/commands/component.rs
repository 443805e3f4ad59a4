//! Add and remove commands for single components

use std::path::Path;

use amag_core::{Action, Registry};
use colored::Colorize;

use super::{installer_for, print_outcome, project_installer};
use crate::error::{CliError, Result};

/// Run the add command
///
/// Installs one component. An existing copy is left untouched.
pub fn run_add(target: &Path, kind: &str, name: &str) -> Result<()> {
    let registry = Registry::builtin();
    registry.lookup(kind, name)?;
    let installer = installer_for(&registry, target)?;

    let outcome = installer.add(kind, name)?;
    print_outcome(&outcome);

    match outcome.action {
        Action::TemplateMissing => Err(CliError::user(format!(
            "Template for {} not found",
            outcome.label
        ))),
        Action::Skipped => {
            println!("Use {} to overwrite it with the latest template.", "amag update".cyan());
            Ok(())
        }
        _ => {
            println!();
            println!(
                "{} Added {} to {}",
                "OK".green().bold(),
                outcome.label.cyan(),
                installer.project().root().display()
            );
            Ok(())
        }
    }
}

/// Run the remove command
///
/// Removing a component that is not installed only prints a warning.
pub fn run_remove(target: &Path, kind: &str, name: &str) -> Result<()> {
    let registry = Registry::builtin();
    let installer = project_installer(&registry, target)?;

    let outcome = installer.remove(kind, name)?;
    print_outcome(&outcome);

    Ok(())
}
