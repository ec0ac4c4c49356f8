//! Reveal command - recover a hidden message from steganographic text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shadowink::{reveal_with_config, DecoderConfig};

use super::hide::parse_channel;
use super::{resolve_text, CommandExecutor};

/// Recover a hidden message from steganographic text.
///
/// Prints the message, or "No hidden message found" when the text carries
/// no payload on the chosen channel. A payload that fails decryption
/// (wrong passphrase) is an error, not an empty result.
#[derive(Args, Debug)]
pub struct RevealCommand {
    /// Steganographic text given inline (reads from stdin if not provided)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read steganographic text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Decrypt the extracted payload with this passphrase
    #[arg(short, long)]
    pub passphrase: Option<String>,

    /// Steganographic channel: spacing or zero-width
    #[arg(long, default_value = "zero-width")]
    pub channel: String,

    /// Verbose output (shows extraction detail)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for RevealCommand {
    fn execute(&self) -> Result<()> {
        let text = resolve_text(self.text.as_deref(), self.file.as_ref(), "steganographic text")?;
        let channel = parse_channel(&self.channel)?;

        let config = DecoderConfig {
            verbose: self.verbose,
        };

        let recovered = reveal_with_config(&text, self.passphrase.as_deref(), channel, &config)
            .context("Failed to recover message")?;

        match recovered {
            Some(message) => println!("{message}"),
            None => println!("No hidden message found"),
        }

        Ok(())
    }
}
