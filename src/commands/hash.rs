//! Hash command - digest generation.

use anyhow::{bail, Result};
use clap::Args;

use shadowink::hash::{digest_hex, HashAlgorithm};

use super::{resolve_text, CommandExecutor};

/// Hash text with a chosen digest algorithm (hex output).
#[derive(Args, Debug)]
pub struct HashCommand {
    /// Digest algorithm: md5, sha1, sha256, sha512, or ripemd160
    #[arg(short, long, default_value = "sha256")]
    pub algorithm: String,

    /// Text to hash (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,
}

impl CommandExecutor for HashCommand {
    fn execute(&self) -> Result<()> {
        let message = resolve_text(self.message.as_deref(), None, "message")?;

        let algorithm = match self.algorithm.to_lowercase().as_str() {
            "md5" => HashAlgorithm::Md5,
            "sha1" => HashAlgorithm::Sha1,
            "sha256" => HashAlgorithm::Sha256,
            "sha512" => HashAlgorithm::Sha512,
            "ripemd160" => HashAlgorithm::Ripemd160,
            other => bail!(
                "Unknown algorithm: {}. Use: md5, sha1, sha256, sha512, or ripemd160",
                other
            ),
        };

        println!("{}", digest_hex(&message, algorithm));
        Ok(())
    }
}
