//! List command implementation

use amag_core::Registry;
use colored::Colorize;

use crate::error::Result;

/// Run the list command
pub fn run_list(json: bool) -> Result<()> {
    let registry = Registry::builtin();
    let groups = registry.describe();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("{}", "Available components".bold());
    println!();

    for group in &groups {
        println!("{}:", group.label.cyan().bold());
        for component in &group.components {
            println!("  {:<28} {}", component.name.green(), component.description.dimmed());
        }
        println!();
    }

    println!(
        "{} {} (root context prompt, installed by {})",
        "+".dimmed(),
        "GEMINI.md".green(),
        "amag init".cyan()
    );
    println!();
    println!(
        "{} {} components available. Use {} to install one.",
        "Total:".dimmed(),
        registry.len(),
        "amag add <type> <name>".cyan()
    );

    Ok(())
}
