//! Config show, set and reset commands

use std::path::Path;

use amag_core::{AmagConfig, ConfigStore, ProjectLayout};
use colored::Colorize;

use crate::error::Result;

fn store_for(target: &Path) -> Result<ConfigStore> {
    Ok(ConfigStore::for_project(&ProjectLayout::resolve(target)?))
}

fn print_config(config: &AmagConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Run the config show command
///
/// Prints the merged configuration. A missing file shows the defaults.
pub fn run_config_show(target: &Path) -> Result<()> {
    let store = store_for(target)?;
    if !store.exists() {
        tracing::debug!(path = %store.path().display(), "no config file, showing defaults");
    }
    print_config(&store.read())
}

/// Run the config set command
pub fn run_config_set(target: &Path, dot_path: &str, value: &str) -> Result<()> {
    let store = store_for(target)?;
    let updated = store.set_value(dot_path, value)?;

    println!(
        "{} Set {} = {}",
        "OK".green().bold(),
        dot_path.cyan(),
        amag_core::config::coerce_value(value)
    );
    print_config(&updated)
}

/// Run the config reset command
pub fn run_config_reset(target: &Path) -> Result<()> {
    let store = store_for(target)?;
    let config = store.reset()?;

    println!("{} Config reset to defaults", "OK".green().bold());
    print_config(&config)
}
