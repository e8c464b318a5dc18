use crate::hex::{hex_to_bytes, is_hex_prefixed};
use crate::uint::{UintExt, U256};
use crate::{Bytes, Result, TypesError};

/// A value accepted by the encoder.
///
/// Every scalar variant canonicalizes to a byte string through [`Input::to_bytes`];
/// lists nest to any depth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    Bytes(Vec<u8>),
    List(Vec<Input>),
    Uint(U256),
    /// UTF-8 text. A `0x` prefix marks the rest as hex digits.
    Text(String),
    #[default]
    Nil,
}

impl Input {
    pub fn is_list(&self) -> bool {
        matches!(self, Input::List(_))
    }

    /// Canonical byte string for a scalar input.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Input::Bytes(bytes) => Ok(bytes.clone()),
            Input::Uint(value) => Ok(value.to_minimal_be_bytes()),
            Input::Text(text) if is_hex_prefixed(text) => hex_to_bytes(text),
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::Nil => Ok(Vec::new()),
            Input::List(_) => Err(TypesError::UnsupportedInput("list")),
        }
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl From<&[u8]> for Input {
    fn from(bytes: &[u8]) -> Self {
        Input::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Input {
    fn from(bytes: [u8; N]) -> Self {
        Input::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for Input {
    fn from(bytes: Bytes) -> Self {
        Input::Bytes(bytes.into_vec())
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<U256> for Input {
    fn from(value: U256) -> Self {
        Input::Uint(value)
    }
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Uint(U256::from(value))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);

impl From<Vec<Input>> for Input {
    fn from(items: Vec<Input>) -> Self {
        Input::List(items)
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Nil, Into::into)
    }
}
