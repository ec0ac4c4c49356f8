//! Decrypt command - reverse of `encrypt`.

use anyhow::{Context, Result};
use clap::Args;

use shadowink::crypto::decrypt_text;

use super::{resolve_text, CommandExecutor};

/// Decrypt base64 ciphertext produced by the encrypt command.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Ciphertext to decrypt (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Decryption passphrase
    #[arg(short, long)]
    pub passphrase: String,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let ciphertext = resolve_text(self.message.as_deref(), None, "ciphertext")?;

        let plaintext = decrypt_text(&ciphertext, &self.passphrase)
            .context("Failed to decrypt (wrong passphrase or corrupted ciphertext)")?;

        println!("{plaintext}");
        Ok(())
    }
}
