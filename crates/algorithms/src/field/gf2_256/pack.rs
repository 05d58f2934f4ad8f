//! Conversion between the 32-byte encoding and 64-bit words

use byteorder::{ByteOrder, LittleEndian};

use super::constants::{GF2_256_FIELD_ELEMENT_SIZE, NWORDS};

/// Condense a little-endian byte encoding into four words, word 0 least
/// significant.
///
/// Byte `i` lands in word `i / 8` at bit offset `(i % 8) * 8`.
#[inline]
pub fn pack(bytes: &[u8; GF2_256_FIELD_ELEMENT_SIZE]) -> [u64; NWORDS] {
    let mut words = [0u64; NWORDS];
    LittleEndian::read_u64_into(bytes, &mut words);
    words
}

/// Inverse of [`pack`]
#[inline]
pub fn unpack(words: &[u64; NWORDS]) -> [u8; GF2_256_FIELD_ELEMENT_SIZE] {
    let mut bytes = [0u8; GF2_256_FIELD_ELEMENT_SIZE];
    LittleEndian::write_u64_into(words, &mut bytes);
    bytes
}
