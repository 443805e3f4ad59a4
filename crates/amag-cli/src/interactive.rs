//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation.

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::error::Result;

/// Whether both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(answer)
}
