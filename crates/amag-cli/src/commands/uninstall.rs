//! Uninstall command implementation

use std::path::Path;

use amag_core::{Registry, UninstallOptions};
use colored::Colorize;

use super::{print_outcome, project_installer};
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the uninstall command
///
/// Without `force` the user must confirm on a terminal; with no terminal
/// attached the command refuses to run.
pub fn run_uninstall(target: &Path, keep_gemini_md: bool, force: bool) -> Result<()> {
    let registry = Registry::builtin();
    let installer = project_installer(&registry, target)?;

    if !force {
        if !interactive::is_interactive() {
            return Err(CliError::user(
                "Refusing to uninstall without confirmation. Re-run with --force.",
            ));
        }
        let prompt = format!(
            "Remove all AMAG components from {}?",
            installer.project().root().display()
        );
        if !interactive::confirm(&prompt, false)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    println!(
        "{} Uninstalling AMAG from {}",
        "=>".blue().bold(),
        installer.project().root().display().to_string().cyan()
    );
    println!();

    let report = installer.uninstall(&UninstallOptions {
        keep_root_context: keep_gemini_md,
    })?;

    for item in &report.items {
        print_outcome(item);
    }

    println!();
    println!(
        "{} {} removed, {} already absent.",
        "OK".green().bold(),
        report.removed(),
        report.absent()
    );

    Ok(())
}
