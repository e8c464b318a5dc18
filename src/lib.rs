// Core modules
pub mod cli;
pub mod config;
pub mod json;

// Re-export commonly used types
pub use cli::{run, Command};
pub use config::{CodecConfig, Config, LogConfig};
pub use json::{input_from_json, item_to_json, parse_input, JsonError};

// Re-export crate modules
pub use rlp_codec as codec;
pub use rlp_types as types;

pub use rlp_codec::{decode, decode_stream, encode, get_length, Decoded, Decoder, RlpError, RlpItem};
pub use rlp_types::{Bytes, Input};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get tool version string
pub fn client_version() -> String {
    format!("rlp-rust/v{}/rust", VERSION)
}
