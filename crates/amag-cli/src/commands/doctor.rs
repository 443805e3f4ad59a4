//! Doctor command implementation

use std::path::Path;

use amag_core::Registry;
use colored::Colorize;
use serde::Serialize;

use super::project_installer;
use crate::error::Result;

#[derive(Serialize)]
struct DoctorJson<'a> {
    root: &'a Path,
    installed: usize,
    missing: usize,
    total: usize,
    entries: &'a [amag_core::DoctorEntry],
}

/// Run the doctor command
///
/// Reports which managed paths exist. Missing components are not an error.
pub fn run_doctor(target: &Path, json: bool) -> Result<()> {
    let registry = Registry::builtin();
    let installer = project_installer(&registry, target)?;
    let report = installer.doctor();

    if json {
        let output = DoctorJson {
            root: installer.project().root(),
            installed: report.installed(),
            missing: report.missing(),
            total: report.total(),
            entries: &report.entries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} Checking AMAG installation in {}",
        "=>".blue().bold(),
        installer.project().root().display().to_string().cyan()
    );
    println!();

    for entry in &report.entries {
        if entry.installed {
            println!("   {} {}", "OK".green().bold(), entry.label);
        } else {
            println!("   {} {}", "MISSING".red().bold(), entry.label);
        }
    }

    println!();
    println!(
        "{} installed, {} missing out of {} total",
        report.installed(),
        report.missing(),
        report.total()
    );

    if !report.is_complete() {
        println!(
            "Run {} to install missing components.",
            "amag init".cyan()
        );
    }

    Ok(())
}
