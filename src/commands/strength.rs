//! Strength command - passphrase assessment and key generation.

use anyhow::{bail, Result};
use clap::Args;

use shadowink::strength::{assess, generate_key, score};

use super::CommandExecutor;

/// Assess passphrase strength, or generate a strong key.
#[derive(Args, Debug)]
pub struct StrengthCommand {
    /// Passphrase to assess
    #[arg(short, long, conflicts_with = "generate")]
    pub key: Option<String>,

    /// Generate a random key instead of assessing one
    #[arg(short, long)]
    pub generate: bool,
}

impl CommandExecutor for StrengthCommand {
    fn execute(&self) -> Result<()> {
        if self.generate {
            let key = generate_key();
            let level = assess(&key).map(|l| l.to_string()).unwrap_or_default();
            println!("{key}");
            eprintln!("Generated {}-character key ({})", key.chars().count(), level);
            return Ok(());
        }

        let key = match &self.key {
            Some(k) => k,
            None => bail!("Provide --key to assess, or --generate for a new key"),
        };

        match assess(key) {
            Some(level) => println!("{level} (score {}/7)", score(key)),
            None => println!("Empty key has no strength"),
        }

        Ok(())
    }
}
