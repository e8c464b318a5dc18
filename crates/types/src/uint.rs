use primitive_types::U256 as PrimitiveU256;

pub type U256 = PrimitiveU256;

pub trait UintExt {
    fn to_minimal_be_bytes(&self) -> Vec<u8>;
}

impl UintExt for U256 {
    /// Big-endian bytes without leading zeros. Zero maps to an empty vector.
    fn to_minimal_be_bytes(&self) -> Vec<u8> {
        let mut bytes = [0u8; 32];
        self.to_big_endian(&mut bytes);

        let first_non_zero = bytes.iter().position(|&b| b != 0).unwrap_or(32);
        bytes[first_non_zero..].to_vec()
    }
}
