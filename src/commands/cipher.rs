//! Cipher command - classic substitution ciphers.

use anyhow::{bail, Context, Result};
use clap::Args;

use shadowink::cipher::{atbash, caesar, vigenere, xor, Mode};

use super::{resolve_text, CommandExecutor};

/// Apply a classic cipher: caesar, vigenere, xor, or atbash.
///
/// These are educational toys, not real encryption - use the encrypt
/// command for confidentiality.
#[derive(Args, Debug)]
pub struct CipherCommand {
    /// Cipher to apply: caesar, vigenere, xor, or atbash
    #[arg(short, long)]
    pub algorithm: String,

    /// Text to process (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Shift amount for caesar
    #[arg(long, default_value_t = 3)]
    pub shift: u8,

    /// Key for vigenere (alphabetic) or xor (0-255)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Decrypt instead of encrypt (xor and atbash are self-inverse)
    #[arg(short, long)]
    pub decrypt: bool,
}

impl CommandExecutor for CipherCommand {
    fn execute(&self) -> Result<()> {
        let message = resolve_text(self.message.as_deref(), None, "message")?;

        let mode = if self.decrypt {
            Mode::Decrypt
        } else {
            Mode::Encrypt
        };

        let result = match self.algorithm.to_lowercase().as_str() {
            "caesar" => caesar(&message, self.shift, mode),
            "vigenere" => {
                let key = match &self.key {
                    Some(k) => k,
                    None => bail!("vigenere requires --key"),
                };
                vigenere(&message, key, mode).context("Failed to apply vigenere")?
            }
            "xor" => {
                let key = match &self.key {
                    Some(k) => k
                        .parse::<u8>()
                        .with_context(|| format!("XOR key must be a number 0-255, got '{k}'"))?,
                    None => bail!("xor requires --key"),
                };
                xor(&message, key)
            }
            "atbash" => atbash(&message),
            other => bail!("Unknown cipher: {}. Use: caesar, vigenere, xor, or atbash", other),
        };

        println!("{result}");
        Ok(())
    }
}
