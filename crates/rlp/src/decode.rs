use crate::header::{slice, Header, EMPTY_STRING_CODE};
use crate::{DecoderError, Result, RlpItem};
use tracing::{debug, trace};

/// Default bound on list nesting accepted by [`Decoder`].
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// One value taken from the front of a buffer, plus what follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub data: RlpItem,
    pub remainder: &'a [u8],
}

/// Recursive-descent parser over untrusted input.
///
/// The decoder holds no buffer state and can be shared freely; each call works
/// on borrowed views of its own input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Allows at most `max_depth` nested lists. Zero rejects every list.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Decoder { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decodes exactly one value; trailing bytes are an error.
    pub fn decode(&self, input: &[u8]) -> Result<RlpItem> {
        let Decoded { data, remainder } = self.decode_stream(input)?;
        if !remainder.is_empty() {
            debug!(trailing = remainder.len(), "Rejected RLP input with trailing bytes");
            return Err(DecoderError::RemainderMismatch(remainder.len()).into());
        }
        Ok(data)
    }

    /// Decodes the first value and hands back the unconsumed suffix.
    ///
    /// An empty buffer yields an empty byte string and an empty remainder.
    pub fn decode_stream<'a>(&self, input: &'a [u8]) -> Result<Decoded<'a>> {
        if input.is_empty() {
            return Ok(Decoded {
                data: RlpItem::String(Vec::new()),
                remainder: input,
            });
        }

        match self.parse_one(input, 0) {
            Ok(decoded) => {
                trace!(
                    consumed = input.len() - decoded.remainder.len(),
                    remaining = decoded.remainder.len(),
                    "Decoded RLP value"
                );
                Ok(decoded)
            }
            Err(err) => {
                debug!(error = %err, input_len = input.len(), "Rejected RLP input");
                Err(err.into())
            }
        }
    }

    /// Iterates over consecutive values in `input`.
    pub fn iter<'a>(&self, input: &'a [u8]) -> DecodeIter<'a> {
        DecodeIter {
            decoder: *self,
            remaining: input,
            failed: false,
        }
    }

    fn parse_one<'a>(&self, buf: &'a [u8], depth: usize) -> std::result::Result<Decoded<'a>, DecoderError> {
        let header = Header::decode(buf)?;

        if header.list
            && header.header_len > 1
            && header.payload_len > buf.len().saturating_sub(header.header_len)
        {
            return Err(DecoderError::TotalLengthExceedsBuffer {
                total: header.header_len.saturating_add(header.payload_len),
                available: buf.len(),
            });
        }

        let total = header.total_len()?;

        let payload = slice(buf, header.header_len, total)?;
        let remainder = slice(buf, total, buf.len())?;

        if !header.list {
            if let [byte] = payload {
                if header.header_len == 1 && *byte < EMPTY_STRING_CODE {
                    return Err(DecoderError::NonCanonicalSingleByte(*byte));
                }
            }
            return Ok(Decoded {
                data: RlpItem::String(payload.to_vec()),
                remainder,
            });
        }

        if depth >= self.max_depth {
            return Err(DecoderError::DepthLimitExceeded(self.max_depth));
        }

        let mut items = Vec::new();
        let mut inner = payload;
        while !inner.is_empty() {
            let decoded = self.parse_one(inner, depth + 1)?;
            items.push(decoded.data);
            inner = decoded.remainder;
        }

        Ok(Decoded {
            data: RlpItem::List(items),
            remainder,
        })
    }
}

/// Stream-decodes values until the buffer is exhausted or a value is rejected.
#[derive(Debug, Clone)]
pub struct DecodeIter<'a> {
    decoder: Decoder,
    remaining: &'a [u8],
    failed: bool,
}

impl<'a> DecodeIter<'a> {
    /// Bytes not yet decoded.
    pub fn remainder(&self) -> &'a [u8] {
        self.remaining
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = Result<RlpItem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining.is_empty() {
            return None;
        }

        match self.decoder.decode_stream(self.remaining) {
            Ok(Decoded { data, remainder }) => {
                self.remaining = remainder;
                Some(Ok(data))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{encode_length, EMPTY_LIST_CODE};
    use crate::RlpError;

    fn decode_err(input: &[u8]) -> DecoderError {
        match Decoder::new().decode(input) {
            Err(RlpError::Decoder(err)) => err,
            other => panic!("expected decoder error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_single_byte() {
        let decoder = Decoder::new();
        assert_eq!(decoder.decode(&[0x00]).unwrap(), RlpItem::String(vec![0x00]));
        assert_eq!(decoder.decode(&[0x7f]).unwrap(), RlpItem::String(vec![0x7f]));
    }

    #[test]
    fn test_decode_string() {
        let item = Decoder::new().decode(&[0x83, b'd', b'o', b'g']).unwrap();
        assert_eq!(item, RlpItem::String(b"dog".to_vec()));
    }

    #[test]
    fn test_decode_list() {
        let item = Decoder::new()
            .decode(&[0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g'])
            .unwrap();
        assert_eq!(
            item,
            RlpItem::List(vec![
                RlpItem::String(b"cat".to_vec()),
                RlpItem::String(b"dog".to_vec()),
            ])
        );
    }

    #[test]
    fn test_decode_empty() {
        let decoder = Decoder::new();
        assert_eq!(decoder.decode(&[0x80]).unwrap(), RlpItem::String(vec![]));
        assert_eq!(decoder.decode(&[0xc0]).unwrap(), RlpItem::List(vec![]));
        assert_eq!(decoder.decode(&[]).unwrap(), RlpItem::String(vec![]));
    }

    #[test]
    fn test_decode_long_string() {
        let mut input = vec![0xb8, 0x38];
        input.extend_from_slice(&[0xaa; 56]);
        assert_eq!(Decoder::new().decode(&input).unwrap(), RlpItem::String(vec![0xaa; 56]));
    }

    #[test]
    fn test_decode_long_list() {
        // 20 three-byte strings: 60 payload bytes
        let mut input = vec![0xf8, 0x3c];
        for _ in 0..20 {
            input.extend_from_slice(&[0x82, 0x01, 0x02]);
        }
        let item = Decoder::new().decode(&input).unwrap();
        let items = item.as_list().unwrap();
        assert_eq!(items.len(), 20);
        assert!(items.iter().all(|i| i.as_bytes() == Some(&[0x01, 0x02][..])));
    }

    #[test]
    fn test_reject_non_canonical_single_byte() {
        assert_eq!(decode_err(&[0x81, 0x05]), DecoderError::NonCanonicalSingleByte(0x05));
        assert_eq!(decode_err(&[0x81, 0x00]), DecoderError::NonCanonicalSingleByte(0x00));
        assert_eq!(Decoder::new().decode(&[0x81, 0x80]).unwrap(), RlpItem::String(vec![0x80]));
    }

    #[test]
    fn test_reject_long_form_for_short_payload() {
        let mut input = vec![0xb8, 0x37];
        input.extend_from_slice(&[0xaa; 55]);
        assert_eq!(decode_err(&input), DecoderError::NonCanonicalLengthForm(55));

        let mut input = vec![0xf8, 0x02];
        input.extend_from_slice(&[0x01, 0x02]);
        assert_eq!(decode_err(&input), DecoderError::NonCanonicalLengthForm(2));
    }

    #[test]
    fn test_reject_leading_zero_length() {
        let mut input = vec![0xb9, 0x00, 0x40];
        input.extend_from_slice(&[0xaa; 64]);
        assert_eq!(decode_err(&input), DecoderError::ExtraLeadingZeros);
    }

    #[test]
    fn test_reject_truncated_input() {
        assert_eq!(
            decode_err(&[0x83, b'd', b'o']),
            DecoderError::OutOfBounds { end: 4, len: 3 }
        );
        assert_eq!(decode_err(&[0xb8]), DecoderError::OutOfBounds { end: 2, len: 1 });
        assert_eq!(decode_err(&[0xc2, 0x01]), DecoderError::OutOfBounds { end: 3, len: 2 });
        assert_eq!(decode_err(&[0xf8]), DecoderError::OutOfBounds { end: 2, len: 1 });

        let mut input = vec![0xb8, 0x40];
        input.extend_from_slice(&[0xaa; 10]);
        assert_eq!(decode_err(&input), DecoderError::OutOfBounds { end: 66, len: 12 });

        let mut input = vec![0xf8, 0x40];
        input.extend_from_slice(&[0x01; 10]);
        assert_eq!(
            decode_err(&input),
            DecoderError::TotalLengthExceedsBuffer { total: 66, available: 12 }
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_reject_long_list_length_overflowing_usize() {
        let mut input = vec![0xff];
        input.extend_from_slice(&[0xff; 8]);
        input.push(0x01);
        assert!(matches!(
            decode_err(&input),
            DecoderError::TotalLengthExceedsBuffer { total: usize::MAX, .. }
        ));
    }

    #[test]
    fn test_reject_element_overrunning_its_list() {
        // the inner string claims three bytes but the list payload holds two
        assert_eq!(
            decode_err(&[0xc2, 0x83, b'a', b'b', b'c']),
            DecoderError::OutOfBounds { end: 4, len: 2 }
        );
    }

    #[test]
    fn test_reject_trailing_bytes() {
        assert_eq!(decode_err(&[0x01, 0x02]), DecoderError::RemainderMismatch(1));
        assert_eq!(decode_err(&[0xc0, 0xc0, 0xc0]), DecoderError::RemainderMismatch(2));
    }

    #[test]
    fn test_decode_stream_returns_remainder() {
        let input = [0x83, b'd', b'o', b'g', 0xc0, 0x05];
        let decoder = Decoder::new();

        let first = decoder.decode_stream(&input).unwrap();
        assert_eq!(first.data, RlpItem::String(b"dog".to_vec()));
        assert_eq!(first.remainder, &[0xc0, 0x05]);

        let second = decoder.decode_stream(first.remainder).unwrap();
        assert_eq!(second.data, RlpItem::List(vec![]));

        let third = decoder.decode_stream(second.remainder).unwrap();
        assert_eq!(third.data, RlpItem::String(vec![0x05]));
        assert!(third.remainder.is_empty());
    }

    #[test]
    fn test_iter_yields_each_value() {
        let input = [0x01, 0x82, 0x04, 0x00, 0xc1, 0x02];
        let items: Vec<RlpItem> = Decoder::new().iter(&input).collect::<Result<_>>().unwrap();
        assert_eq!(
            items,
            vec![
                RlpItem::String(vec![0x01]),
                RlpItem::String(vec![0x04, 0x00]),
                RlpItem::List(vec![RlpItem::String(vec![0x02])]),
            ]
        );
    }

    #[test]
    fn test_iter_stops_after_error() {
        let input = [0x01, 0x81, 0x05, 0x02];
        let mut iter = Decoder::new().iter(&input);
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
        assert_eq!(iter.remainder(), &[0x81, 0x05, 0x02]);
    }

    #[test]
    fn test_depth_limit() {
        // [[[]]]
        let input = [0xc2, 0xc1, 0xc0];
        assert!(Decoder::with_max_depth(3).decode(&input).is_ok());
        assert!(matches!(
            Decoder::with_max_depth(2).decode(&input),
            Err(RlpError::Decoder(DecoderError::DepthLimitExceeded(2)))
        ));
        assert!(Decoder::with_max_depth(0).decode(&[0x80]).is_ok());
    }

    #[test]
    fn test_deeply_nested_input_hits_depth_limit() {
        let mut input = vec![0xc0];
        for _ in 0..DEFAULT_MAX_DEPTH + 10 {
            let mut wrapped = encode_length(input.len(), EMPTY_LIST_CODE);
            wrapped.extend_from_slice(&input);
            input = wrapped;
        }
        assert!(matches!(
            Decoder::new().decode(&input).unwrap_err().as_decoder(),
            Some(DecoderError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
        ));
    }
}
