//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// AMAG - install agent rules, workflows and skills into a project
#[derive(Parser, Debug)]
#[command(name = "amag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Target project selection shared by most commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Target project directory
    #[arg(short, long, default_value = ".")]
    pub target: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install all components (existing files are skipped)
    ///
    /// Examples:
    ///   amag init                 # Install into the current directory
    ///   amag init -t ../service   # Install into another project
    ///   amag init --no-gemini-md  # Leave GEMINI.md alone
    Init {
        #[command(flatten)]
        target: TargetArgs,

        /// Skip generating GEMINI.md at project root
        #[arg(long)]
        no_gemini_md: bool,

        /// Proceed without asking when files already exist
        #[arg(short, long)]
        yes: bool,
    },

    /// Overwrite all components with the latest templates
    Update {
        #[command(flatten)]
        target: TargetArgs,

        /// Skip updating GEMINI.md at project root
        #[arg(long)]
        no_gemini_md: bool,
    },

    /// Add a single component (rule, workflow, or skill)
    ///
    /// Use 'amag list' to see available components.
    ///
    /// Examples:
    ///   amag add skill git-master
    ///   amag add rule code-quality -t ../service
    Add {
        /// Component type: rule, workflow or skill
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Component name
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Remove a single component (rule, workflow, or skill)
    Remove {
        /// Component type: rule, workflow or skill
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Component name
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Remove all AMAG-managed files from the target project
    Uninstall {
        #[command(flatten)]
        target: TargetArgs,

        /// Keep GEMINI.md at project root
        #[arg(long)]
        keep_gemini_md: bool,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List all available components
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check which components are installed in the target project
    Doctor {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Manage the review configuration (.amag/config.json)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   amag completions bash > ~/.local/share/bash-completion/completions/amag
    ///   amag completions zsh > ~/.zfunc/_amag
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the current review configuration
    Show {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Set a config value (e.g. review.consultant.cli codex)
    Set {
        /// Dot-separated path, e.g. review.timeout_ms
        path: String,

        /// New value; numbers and `null` are converted
        value: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Reset the configuration to defaults
    Reset {
        #[command(flatten)]
        target: TargetArgs,
    },
}
