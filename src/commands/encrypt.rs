//! Encrypt command - passphrase-encrypt text without embedding it.

use anyhow::{Context, Result};
use clap::Args;

use shadowink::crypto::encrypt_text;
use shadowink::strength;

use super::{resolve_text, CommandExecutor};

/// Encrypt text with a passphrase (base64 output).
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Text to encrypt (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Encryption passphrase
    #[arg(short, long)]
    pub passphrase: String,

    /// Verbose output (shows passphrase strength)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let message = resolve_text(self.message.as_deref(), None, "message")?;

        if self.verbose {
            if let Some(level) = strength::assess(&self.passphrase) {
                eprintln!("Passphrase strength: {level}");
            }
        }

        let armored =
            encrypt_text(&message, &self.passphrase).context("Failed to encrypt message")?;

        println!("{armored}");
        Ok(())
    }
}
