//! Hide command - embed a secret message in carrier text.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use shadowink::{hide_with_config, Channel, EncoderConfig};

use super::{resolve_text, CommandExecutor};

/// Hide a secret message inside carrier text.
///
/// The output looks like the carrier; the secret travels in sentence
/// spacing or in invisible zero-width characters. With --passphrase the
/// secret is encrypted before embedding, so extraction needs both the
/// channel and the passphrase.
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Secret message to hide (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Carrier text given inline
    #[arg(short, long, conflicts_with = "carrier_file")]
    pub carrier: Option<String>,

    /// Read carrier text from a file
    #[arg(long)]
    pub carrier_file: Option<PathBuf>,

    /// Encrypt the message with this passphrase before embedding
    #[arg(short, long)]
    pub passphrase: Option<String>,

    /// Steganographic channel: spacing or zero-width
    #[arg(long, default_value = "zero-width")]
    pub channel: String,

    /// Fixed insertion offset for the zero-width channel (random when omitted)
    #[arg(long)]
    pub offset: Option<usize>,

    /// Verbose output (shows payload sizes)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for HideCommand {
    fn execute(&self) -> Result<()> {
        let carrier = resolve_text(
            self.carrier.as_deref(),
            self.carrier_file.as_ref(),
            "carrier text",
        )?;

        let message = match &self.message {
            Some(m) => m.clone(),
            None => resolve_text(None, None, "secret message")?,
        };

        let channel = parse_channel(&self.channel)?;

        if self.verbose {
            eprintln!(
                "Hiding {} characters in a {} character carrier",
                message.chars().count(),
                carrier.chars().count()
            );
        }

        let config = EncoderConfig {
            verbose: self.verbose,
            offset: self.offset,
        };

        let steg = hide_with_config(
            &carrier,
            &message,
            self.passphrase.as_deref(),
            channel,
            &config,
        )?;

        println!("{steg}");
        Ok(())
    }
}

/// Maps a channel name to the library enum.
pub(crate) fn parse_channel(name: &str) -> Result<Channel> {
    match name.to_lowercase().as_str() {
        "spacing" => Ok(Channel::Spacing),
        "zero-width" | "zw" => Ok(Channel::ZeroWidth),
        _ => bail!("Unknown channel: {}. Use: spacing or zero-width", name),
    }
}
