//! AMAG CLI
//!
//! Installs agent rules, workflows and skills into a project's `.agent/`
//! tree and manages the review configuration in `.amag/config.json`.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Agent rules, workflows and skills installer", "amag".green().bold());
            println!();
            println!("Run {} for available commands.", "amag --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            target,
            no_gemini_md,
            yes,
        } => commands::run_init(&target.target, no_gemini_md, yes),
        Commands::Update {
            target,
            no_gemini_md,
        } => commands::run_update(&target.target, no_gemini_md),
        Commands::Add { kind, name, target } => commands::run_add(&target.target, &kind, &name),
        Commands::Remove { kind, name, target } => {
            commands::run_remove(&target.target, &kind, &name)
        }
        Commands::Uninstall {
            target,
            keep_gemini_md,
            force,
        } => commands::run_uninstall(&target.target, keep_gemini_md, force),
        Commands::List { json } => commands::run_list(json),
        Commands::Doctor { target, json } => commands::run_doctor(&target.target, json),
        Commands::Config { action } => cmd_config(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "amag", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show { target } => commands::run_config_show(&target.target),
        ConfigAction::Set {
            path,
            value,
            target,
        } => commands::run_config_set(&target.target, &path, &value),
        ConfigAction::Reset { target } => commands::run_config_reset(&target.target),
    }
}
