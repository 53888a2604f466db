//! module `loader::help`

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

const HELP_TOML: &str = include_str!("../../data/help_commands.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Parse help commands from TOML text.
/// # Errors
/// - on TOML parsing error
pub fn parse_help_commands(text: &str) -> Result<Vec<HelpCommand>> {
    let wrapper: HelpCommandFile = toml::from_str(text).context("parsing help commands")?;
    info!("{} help commands loaded", wrapper.commands.len());
    Ok(wrapper.commands)
}

/// The built-in help list. A broken table logs a warning and yields an empty list.
pub fn help_commands() -> Vec<HelpCommand> {
    parse_help_commands(HELP_TOML).unwrap_or_else(|e| {
        warn!("embedded help table is unreadable: {e:#}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_help_parses() {
        let commands = help_commands();
        assert!(commands.iter().any(|cmd| cmd.command.starts_with("attack")));
        assert!(commands.iter().any(|cmd| cmd.command.contains("unlock")));
    }

    #[test]
    fn bad_table_is_an_error() {
        assert!(parse_help_commands("commands = 3").is_err());
    }
}
