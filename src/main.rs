//! Shadowink - hide messages in plain sight
//!
//! A CLI for text steganography with optional passphrase encryption,
//! plus classic ciphers, radix conversions, and digest utilities.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CipherCommand, CommandExecutor, ConvertCommand, DecryptCommand, EncryptCommand, HashCommand,
    HideCommand, RevealCommand, StrengthCommand,
};

/// Shadowink - hide messages in plain sight
///
/// Embeds secret messages in innocuous carrier text over a sentence-spacing
/// or zero-width character channel, with optional passphrase encryption.
#[derive(Parser)]
#[command(name = "shadowink")]
#[command(version)]
#[command(about = "Text steganography toolkit - hide messages in plain sight")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a secret message inside carrier text
    Hide(HideCommand),

    /// Recover a hidden message from steganographic text
    Reveal(RevealCommand),

    /// Encrypt text with a passphrase (base64 output)
    Encrypt(EncryptCommand),

    /// Decrypt base64 ciphertext from the encrypt command
    Decrypt(DecryptCommand),

    /// Apply a classic cipher (caesar, vigenere, xor, atbash)
    Cipher(CipherCommand),

    /// Convert between text, binary, hex, and decimal
    Convert(ConvertCommand),

    /// Hash text (md5, sha1, sha256, sha512, ripemd160)
    Hash(HashCommand),

    /// Assess passphrase strength or generate a strong key
    Strength(StrengthCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide(cmd) => cmd.execute(),
        Commands::Reveal(cmd) => cmd.execute(),
        Commands::Encrypt(cmd) => cmd.execute(),
        Commands::Decrypt(cmd) => cmd.execute(),
        Commands::Cipher(cmd) => cmd.execute(),
        Commands::Convert(cmd) => cmd.execute(),
        Commands::Hash(cmd) => cmd.execute(),
        Commands::Strength(cmd) => cmd.execute(),
    }
}
