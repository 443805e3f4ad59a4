//! Registry/template drift check
//!
//! Compares the built-in component registry with a templates directory and
//! exits non-zero when they disagree. Run before packaging.
//!
//! Usage: `amag-validate-registry [TEMPLATES_DIR]`

use std::path::PathBuf;

use amag_core::{Registry, TemplateSource, check_registry_sync};
use clap::Parser;
use colored::Colorize;

/// Verify that every registered component has a template and vice versa
#[derive(Parser, Debug)]
#[command(name = "amag-validate-registry")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Templates directory (defaults to the packaged templates)
    templates: Option<PathBuf>,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> amag_core::Result<bool> {
    let args = Args::parse();
    let root = match args.templates {
        Some(dir) => dir,
        None => TemplateSource::locate()?.root().to_path_buf(),
    };

    let report = check_registry_sync(&Registry::builtin(), &root)?;

    if !report.is_in_sync() {
        eprintln!(
            "{} Registry drift detected in {}:",
            "ERR".red().bold(),
            root.display()
        );
        eprintln!();
        for issue in &report.issues {
            eprintln!("   {} {} {}", "x".red(), issue.key, issue.direction.describe());
        }
        eprintln!();
        eprintln!(
            "Update the component catalog or the templates directory so both list the same components."
        );
        return Ok(false);
    }

    println!(
        "{} Registry validated: {} components in sync",
        "OK".green().bold(),
        report.registry_count
    );
    Ok(true)
}
