use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::Config;
use crate::json::{item_to_json, parse_input};
use rlp_codec::{encode, get_length};
use rlp_types::hex::hex_to_bytes;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode a JSON value, printing the result as hex
    Encode {
        /// JSON input, e.g. '["cat", 1024, ["0x0400"]]'
        json: String,
    },

    /// Decode hex input, printing the result as JSON
    Decode {
        /// Hex input, with or without 0x prefix
        hex: String,

        /// Decode every concatenated value in the input, one JSON line each
        #[arg(short, long)]
        stream: bool,
    },

    /// Print the total encoded length of the first value
    Length {
        /// Hex input, with or without 0x prefix
        hex: String,
    },
}

/// Runs one command and returns what it prints.
///
/// Empty input decodes to the empty string in both modes, so `decode --stream`
/// prints a single `"0x"` line for it rather than nothing.
pub fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Encode { json } => {
            let input = parse_input(json).context("Failed to read JSON input")?;
            let encoded = encode(&input).context("Failed to encode input")?;
            Ok(encoded.to_string())
        }

        Command::Decode { hex, stream } => {
            let bytes = hex_to_bytes(hex)?;
            let decoder = config.codec.decoder();

            if *stream && !bytes.is_empty() {
                let mut lines = Vec::new();
                for item in decoder.iter(&bytes) {
                    let item = item.context("Failed to decode input")?;
                    lines.push(item_to_json(&item).to_string());
                }
                Ok(lines.join("\n"))
            } else {
                let item = decoder.decode(&bytes).context("Failed to decode input")?;
                let rendered = if *stream {
                    item_to_json(&item).to_string()
                } else {
                    serde_json::to_string_pretty(&item_to_json(&item))?
                };
                Ok(rendered)
            }
        }

        Command::Length { hex } => {
            let bytes = hex_to_bytes(hex)?;
            let length = get_length(&bytes).context("Failed to read header")?;
            Ok(length.to_string())
        }
    }
}
