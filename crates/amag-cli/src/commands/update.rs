//! Update command implementation

use std::path::Path;

use amag_core::{Registry, UpdateOptions};
use colored::Colorize;

use super::{fail_on_missing_templates, installer_for, print_outcome};
use crate::error::Result;

/// Run the update command
///
/// Overwrites every component with the current templates. The config file
/// keeps its values and gains any fields added to the defaults.
pub fn run_update(target: &Path, skip_gemini_md: bool) -> Result<()> {
    let registry = Registry::builtin();
    let installer = installer_for(&registry, target)?;

    println!(
        "{} Updating AMAG in {}",
        "=>".blue().bold(),
        installer.project().root().display().to_string().cyan()
    );
    println!();

    let report = installer.update(&UpdateOptions {
        skip_root_context: skip_gemini_md,
    })?;

    for item in &report.items {
        print_outcome(item);
    }

    println!();
    println!(
        "{} {} updated, {} newly created.",
        "OK".green().bold(),
        report.updated(),
        report.created()
    );

    fail_on_missing_templates(&report)
}
