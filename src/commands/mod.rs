//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait. This provides clean separation of concerns and makes adding new
//! commands easy.

mod cipher;
mod convert;
mod decrypt;
mod encrypt;
mod hash;
mod hide;
mod reveal;
mod strength;

pub use cipher::CipherCommand;
pub use convert::ConvertCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use hash::HashCommand;
pub use hide::HideCommand;
pub use reveal::RevealCommand;
pub use strength::StrengthCommand;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this
/// trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Resolves text from an inline option, a file option, or stdin.
///
/// Commands that accept their main input either way share this helper;
/// `what` names the input in prompts and error messages.
pub(crate) fn resolve_text(
    inline: Option<&str>,
    file: Option<&PathBuf>,
    what: &str,
) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()));
    }

    eprintln!("Reading {what} from stdin (Ctrl+D to finish):");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| format!("Failed to read {what} from stdin"))?;
    Ok(buffer.trim_end().to_string())
}
