pub mod decode;
pub mod encode;
pub mod error;
pub mod header;

pub use decode::{DecodeIter, Decoded, Decoder, DEFAULT_MAX_DEPTH};
pub use encode::Encoder;
pub use error::{DecoderError, EncoderError, Result, RlpError};
pub use header::{get_length, Header, EMPTY_LIST_CODE, EMPTY_STRING_CODE};

use rlp_types::{Bytes, Input};

/// Canonical encoding of `input`.
pub fn encode(input: &Input) -> Result<Bytes> {
    let mut encoder = Encoder::new();
    encoder.encode_input(input)?;
    Ok(Bytes::from_vec(encoder.finish()))
}

/// Encodes `items` as a single list.
pub fn encode_list(items: &[Input]) -> Result<Bytes> {
    let mut encoder = Encoder::new();
    encoder.encode_list(items)?;
    Ok(Bytes::from_vec(encoder.finish()))
}

/// Decodes exactly one value with the default depth limit.
pub fn decode(data: &[u8]) -> Result<RlpItem> {
    Decoder::new().decode(data)
}

/// Decodes the first value of `data` and returns the rest alongside it.
pub fn decode_stream(data: &[u8]) -> Result<Decoded<'_>> {
    Decoder::new().decode_stream(data)
}

/// A decoded value: byte strings at the leaves, lists above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    String(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpItem::String(bytes) => Some(bytes),
            RlpItem::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::String(_) => None,
            RlpItem::List(items) => Some(items),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    pub fn into_input(self) -> Input {
        self.into()
    }
}

impl From<RlpItem> for Input {
    fn from(item: RlpItem) -> Self {
        match item {
            RlpItem::String(bytes) => Input::Bytes(bytes),
            RlpItem::List(items) => Input::List(items.into_iter().map(Input::from).collect()),
        }
    }
}
