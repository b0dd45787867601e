pub mod arguments;

use {
    anyhow::{Context, Result},
    arguments::Command,
    conversions::{encode_hex, to_bytes, to_hex, to_int, to_text},
};

/// Runs a single conversion and returns what should be printed.
pub fn run(command: Command) -> Result<String> {
    let output = match command {
        Command::ToHex(input) => to_hex(input.into_request()?).context("to-hex")?.into_string(),
        Command::ToInt(input) => to_int(input.into_request()?).context("to-int")?.to_string(),
        Command::ToBytes(input) => {
            encode_hex(to_bytes(input.into_request()?).context("to-bytes")?).into_string()
        }
        Command::ToText(input) => to_text(input.into_request()?).context("to-text")?,
    };
    tracing::debug!(%output, "conversion succeeded");
    Ok(output)
}
