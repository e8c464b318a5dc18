pub mod bytes;
pub mod hex;
pub mod input;
pub mod uint;

pub use bytes::Bytes;
pub use input::Input;
pub use uint::U256;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Unsupported input type: {0}")]
    UnsupportedInput(&'static str),
}

pub type Result<T> = std::result::Result<T, TypesError>;
