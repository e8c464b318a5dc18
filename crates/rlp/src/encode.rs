use crate::header::{encode_length, EMPTY_LIST_CODE, EMPTY_STRING_CODE};
use crate::Result;
use bytes::{BufMut, BytesMut};
use rlp_types::uint::{UintExt, U256};
use rlp_types::Input;

/// Accumulates encoded values back to back.
pub struct Encoder {
    buffer: BytesMut,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            buffer: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        match bytes {
            [byte] if *byte < EMPTY_STRING_CODE => self.buffer.put_u8(*byte),
            _ => {
                self.buffer
                    .extend_from_slice(&encode_length(bytes.len(), EMPTY_STRING_CODE));
                self.buffer.extend_from_slice(bytes);
            }
        }
    }

    pub fn encode_uint(&mut self, value: &U256) {
        self.encode_bytes(&value.to_minimal_be_bytes());
    }

    pub fn encode_list(&mut self, items: &[Input]) -> Result<()> {
        let mut list_encoder = Encoder::new();
        for item in items {
            list_encoder.encode_input(item)?;
        }
        let payload = list_encoder.buffer;

        self.buffer
            .extend_from_slice(&encode_length(payload.len(), EMPTY_LIST_CODE));
        self.buffer.extend_from_slice(&payload);
        Ok(())
    }

    pub fn encode_input(&mut self, input: &Input) -> Result<()> {
        match input {
            Input::List(items) => self.encode_list(items),
            Input::Uint(value) => {
                self.encode_uint(value);
                Ok(())
            }
            scalar => {
                let bytes = scalar.to_bytes()?;
                self.encode_bytes(&bytes);
                Ok(())
            }
        }
    }
}
