//! Hex string helpers used at the tooling boundary.

use crate::{Result, TypesError};

/// Returns true if `s` carries the `0x` marker.
pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with("0x")
}

pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Left-pads an odd-length digit string with a single `0`.
pub fn pad_to_even(s: &str) -> String {
    if s.len() % 2 == 0 {
        s.to_string()
    } else {
        format!("0{}", s)
    }
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", ::hex::encode(bytes))
}

/// Decodes a hex string with an optional `0x` prefix.
///
/// Odd digit counts are accepted and read as if a leading `0` were present,
/// so `0x1` and `0x01` both decode to `[0x01]`.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    let digits = pad_to_even(strip_hex_prefix(s));
    ::hex::decode(&digits).map_err(|e| TypesError::InvalidHex(format!("{}: {}", s, e)))
}
