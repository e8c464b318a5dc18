//! Length prefixes shared by strings and lists.

use crate::{DecoderError, Result};

/// Prefix of the empty byte string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix of the empty list.
pub const EMPTY_LIST_CODE: u8 = 0xc0;

/// Largest payload that fits the single-byte header form.
pub const MAX_SHORT_LENGTH: usize = 55;

/// Header for a payload of `len` bytes. `offset` is [`EMPTY_STRING_CODE`] or
/// [`EMPTY_LIST_CODE`].
pub fn encode_length(len: usize, offset: u8) -> Vec<u8> {
    if len <= MAX_SHORT_LENGTH {
        return vec![offset + len as u8];
    }

    let be = len.to_be_bytes();
    let first_non_zero = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    let len_bytes = &be[first_non_zero..];

    let mut header = Vec::with_capacity(1 + len_bytes.len());
    header.push(offset + MAX_SHORT_LENGTH as u8 + len_bytes.len() as u8);
    header.extend_from_slice(len_bytes);
    header
}

/// Reads a big-endian length. The encoding must be minimal: a leading `0x00`
/// is rejected.
///
/// This includes a lone zero byte, so `b8 00` and `f8 00` fail here with
/// `ExtraLeadingZeros` rather than later as a non-canonical long form.
pub fn decode_length(bytes: &[u8]) -> std::result::Result<usize, DecoderError> {
    if bytes.first() == Some(&0) {
        return Err(DecoderError::ExtraLeadingZeros);
    }

    bytes.iter().try_fold(0usize, |len, &byte| {
        len.checked_mul(256)
            .and_then(|len| len.checked_add(byte as usize))
            .ok_or(DecoderError::OutOfBounds {
                end: usize::MAX,
                len: bytes.len(),
            })
    })
}

/// Bounds-checked `buf[start..end]`.
pub(crate) fn slice(buf: &[u8], start: usize, end: usize) -> std::result::Result<&[u8], DecoderError> {
    buf.get(start..end).ok_or(DecoderError::OutOfBounds {
        end,
        len: buf.len(),
    })
}

/// The parsed prefix of one encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub list: bool,
    /// Bytes taken by the prefix itself; zero for a self-encoded byte.
    pub header_len: usize,
    pub payload_len: usize,
}

impl Header {
    /// Dispatches on the first byte of `buf` and validates the prefix.
    ///
    /// Only the header is inspected; the payload may be absent.
    pub fn decode(buf: &[u8]) -> std::result::Result<Self, DecoderError> {
        let first = *buf.first().ok_or(DecoderError::OutOfBounds { end: 1, len: 0 })?;

        let header = match first {
            0x00..=0x7f => Header {
                list: false,
                header_len: 0,
                payload_len: 1,
            },
            0x80..=0xb7 => Header {
                list: false,
                header_len: 1,
                payload_len: (first - EMPTY_STRING_CODE) as usize,
            },
            0xb8..=0xbf => {
                let len_of_len = (first - 0xb7) as usize;
                Header {
                    list: false,
                    header_len: 1 + len_of_len,
                    payload_len: long_length(buf, len_of_len)?,
                }
            }
            0xc0..=0xf7 => Header {
                list: true,
                header_len: 1,
                payload_len: (first - EMPTY_LIST_CODE) as usize,
            },
            0xf8..=0xff => {
                let len_of_len = (first - 0xf7) as usize;
                Header {
                    list: true,
                    header_len: 1 + len_of_len,
                    payload_len: long_length(buf, len_of_len)?,
                }
            }
        };

        Ok(header)
    }

    /// Header plus payload.
    pub fn total_len(&self) -> std::result::Result<usize, DecoderError> {
        self.header_len
            .checked_add(self.payload_len)
            .ok_or(DecoderError::OutOfBounds {
                end: usize::MAX,
                len: self.header_len,
            })
    }
}

fn long_length(buf: &[u8], len_of_len: usize) -> std::result::Result<usize, DecoderError> {
    let len = decode_length(slice(buf, 1, 1 + len_of_len)?)?;
    if len <= MAX_SHORT_LENGTH {
        return Err(DecoderError::NonCanonicalLengthForm(len));
    }
    Ok(len)
}

/// Total encoded size of the value at the start of `buf`, read from its
/// header alone.
pub fn get_length(buf: &[u8]) -> Result<usize> {
    let header = Header::decode(buf)?;
    Ok(header.total_len()?)
}
