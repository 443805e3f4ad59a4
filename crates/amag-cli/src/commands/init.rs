//! Init command implementation

use std::path::Path;

use amag_core::{InitOptions, Registry};
use colored::Colorize;

use super::{fail_on_missing_templates, installer_for, print_outcome};
use crate::error::Result;
use crate::interactive;

/// Run the init command
///
/// Installs every component, `GEMINI.md` (unless `skip_gemini_md`) and the
/// default config. Files that already exist are kept; when any are found the
/// user is asked whether to continue unless `assume_yes` is set or there is
/// no terminal to ask on.
pub fn run_init(target: &Path, skip_gemini_md: bool, assume_yes: bool) -> Result<()> {
    let registry = Registry::builtin();
    let installer = installer_for(&registry, target)?;

    println!(
        "{} Installing AMAG into {}",
        "=>".blue().bold(),
        installer.project().root().display().to_string().cyan()
    );
    println!();

    let options = InitOptions {
        skip_root_context: skip_gemini_md,
        force: false,
    };
    let report = installer.init(&options, |existing| confirm_existing(existing, assume_yes))?;

    if report.cancelled {
        println!("Cancelled.");
        return Ok(());
    }

    for item in &report.items {
        print_outcome(item);
    }

    println!();
    println!(
        "{} AMAG installed: {} created, {} skipped.",
        "OK".green().bold(),
        report.created(),
        report.skipped()
    );
    println!("Run {} to verify installation.", "amag doctor".cyan());

    fail_on_missing_templates(&report)
}

fn confirm_existing(existing: &[String], assume_yes: bool) -> Result<bool> {
    println!(
        "{} {} file(s) already exist and will be SKIPPED:",
        "WARN".yellow().bold(),
        existing.len()
    );
    for label in existing {
        println!("   - {}", label);
    }
    println!();
    println!(
        "Use {} to overwrite existing files with the latest templates.",
        "amag update".cyan()
    );
    println!();

    if assume_yes || !interactive::is_interactive() {
        tracing::debug!("continuing without prompt");
        return Ok(true);
    }
    interactive::confirm("Continue?", true)
}
