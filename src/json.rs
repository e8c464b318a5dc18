//! JSON glue for the command-line tool.

use rlp_codec::RlpItem;
use rlp_types::hex::bytes_to_hex;
use rlp_types::{Input, U256};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported JSON value: {0}")]
    Unsupported(String),
}

/// Maps a JSON document onto an encoder input.
///
/// Arrays become lists, strings become text (so `0x` strings are raw bytes),
/// non-negative integers become unsigned integers and `null` is empty.
///
/// JSON numbers are read as `u64`. Larger integers must be written as `0x`
/// hex strings, which encode to the same bytes as the integer would.
pub fn input_from_json(value: &Value) -> Result<Input, JsonError> {
    match value {
        Value::Null => Ok(Input::Nil),
        Value::String(text) => Ok(Input::Text(text.clone())),
        Value::Number(number) => number
            .as_u64()
            .map(|n| Input::Uint(U256::from(n)))
            .ok_or_else(|| JsonError::Unsupported(format!("{} is not an unsigned integer", number))),
        Value::Array(items) => items
            .iter()
            .map(input_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Input::List),
        Value::Bool(b) => Err(JsonError::Unsupported(format!("boolean {}", b))),
        Value::Object(_) => Err(JsonError::Unsupported("object".to_string())),
    }
}

pub fn parse_input(json: &str) -> Result<Input, JsonError> {
    let value: Value = serde_json::from_str(json)?;
    input_from_json(&value)
}

/// Renders a decoded tree with each byte string as `0x` hex.
pub fn item_to_json(item: &RlpItem) -> Value {
    match item {
        RlpItem::String(bytes) => Value::String(bytes_to_hex(bytes)),
        RlpItem::List(items) => Value::Array(items.iter().map(item_to_json).collect()),
    }
}
