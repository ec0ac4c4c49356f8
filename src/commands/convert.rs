//! Convert command - radix conversions.

use anyhow::{bail, Context, Result};
use clap::Args;

use shadowink::convert::{
    binary_to_decimal, binary_to_hex, binary_to_text, decimal_to_binary, hex_to_binary,
    text_to_binary,
};

use super::{resolve_text, CommandExecutor};

/// Convert between text, binary, hexadecimal, and decimal.
#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Conversion to perform: text-to-binary, binary-to-text,
    /// hex-to-binary, binary-to-hex, decimal-to-binary, binary-to-decimal
    #[arg(long)]
    pub mode: String,

    /// Input value (reads from stdin if not provided)
    #[arg(short, long)]
    pub input: Option<String>,
}

impl CommandExecutor for ConvertCommand {
    fn execute(&self) -> Result<()> {
        let input = resolve_text(self.input.as_deref(), None, "input")?;

        let output = match self.mode.to_lowercase().as_str() {
            "text-to-binary" => text_to_binary(&input),
            "binary-to-text" => {
                binary_to_text(input.trim()).context("Failed to convert binary to text")?
            }
            "hex-to-binary" => {
                hex_to_binary(input.trim()).context("Failed to convert hex to binary")?
            }
            "binary-to-hex" => {
                binary_to_hex(input.trim()).context("Failed to convert binary to hex")?
            }
            "decimal-to-binary" => {
                let value: u64 = input
                    .trim()
                    .parse()
                    .with_context(|| format!("Not a decimal number: '{}'", input.trim()))?;
                decimal_to_binary(value)
            }
            "binary-to-decimal" => binary_to_decimal(input.trim())
                .context("Failed to convert binary to decimal")?
                .to_string(),
            other => bail!(
                "Unknown mode: {}. Use: text-to-binary, binary-to-text, hex-to-binary, \
                 binary-to-hex, decimal-to-binary, or binary-to-decimal",
                other
            ),
        };

        println!("{output}");
        Ok(())
    }
}
