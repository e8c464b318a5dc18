use rlp_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RlpError {
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    #[error("Encoder error: {0}")]
    Encoder(#[from] EncoderError),
}

impl RlpError {
    /// The decoder rule that was violated, if this is a decode failure.
    pub fn as_decoder(&self) -> Option<&DecoderError> {
        match self {
            RlpError::Decoder(err) => Some(err),
            RlpError::Encoder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    #[error("Out of bounds: read up to byte {end} of a {len}-byte buffer")]
    OutOfBounds { end: usize, len: usize },

    #[error("Extra leading zeros in length header")]
    ExtraLeadingZeros,

    #[error("Single byte {0:#04x} below 0x80 must not carry a string prefix")]
    NonCanonicalSingleByte(u8),

    #[error("Long-form header used for payload of {0} bytes")]
    NonCanonicalLengthForm(usize),

    #[error("Total length {total} exceeds buffer of {available} bytes")]
    TotalLengthExceedsBuffer { total: usize, available: usize },

    #[error("Remainder must be empty, {0} trailing bytes left")]
    RemainderMismatch(usize),

    #[error("Nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
}

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("Unsupported input type: {0}")]
    UnsupportedInputType(#[from] TypesError),
}

impl From<TypesError> for RlpError {
    fn from(err: TypesError) -> Self {
        RlpError::Encoder(EncoderError::UnsupportedInputType(err))
    }
}

pub type Result<T> = std::result::Result<T, RlpError>;
