//! Binary field multiplication trait

use crate::Result;

/// A multiplier over a fixed binary field GF(2^m)
///
/// Elements cross this boundary as little-endian byte buffers of exactly
/// [`ELEMENT_SIZE`](Self::ELEMENT_SIZE) bytes: byte 0 holds the
/// coefficients of X^0..X^7, its least significant bit being X^0.
///
/// Implementations must run in time independent of the operand values.
pub trait BinaryFieldMultiplier {
    /// Encoded element size in bytes
    const ELEMENT_SIZE: usize;

    /// Encoded field element produced by [`multiply`](Self::multiply)
    type Element: AsRef<[u8]> + Copy + Eq;

    /// Human-readable name of the field
    fn name() -> &'static str;

    /// Multiply two encoded elements
    ///
    /// Fails only if either operand is not exactly `ELEMENT_SIZE` bytes.
    fn multiply(a: &[u8], b: &[u8]) -> Result<Self::Element>;
}
