//! Binary field GF(2^256)
//!
//! This module implements multiplication in GF(2^256), realised as
//! polynomials over GF(2) of degree < 256 modulo the irreducible pentanomial
//! - Field polynomial: X^256 + X^10 + X^5 + X^2 + 1 (Hankerson, Menezes,
//!   Vanstone, *Guide to Elliptic Curve Cryptography*, Table A.1)
//!
//! Elements are encoded as 32 bytes in little-endian byte and bit order:
//! byte 0 holds the coefficients of X^0..X^7, with X^0 in its least
//! significant bit.
//!
//! A multiplication packs both operands into words, forms the 512-bit
//! carry-less product with the right-to-left comb method, and folds the
//! upper half back with a reduction specialised to the modulus above.
//! All stages are constant-time: the sequence of operations and the memory
//! addresses touched are fixed by the field size alone.

mod comb;
mod constants;
mod element;
mod pack;
mod reduce;

pub use constants::{
    GF2_256_FIELD_ELEMENT_SIZE, GF2_256_MODULUS_DEGREE, GF2_256_MODULUS_TAIL,
};
pub use element::FieldElement;
pub use pack::{pack, unpack};

use binfield_api::{BinaryFieldMultiplier, Error as CoreError, Result as CoreResult};
use zeroize::Zeroize;

use crate::error::{validate, Result};
use constants::NWORDS;

/// Multiply two packed elements: comb multiplication then reduction.
pub(crate) fn mul_words(a: &[u64; NWORDS], b: &[u64; NWORDS]) -> [u64; NWORDS] {
    let mut wide = comb::comb_mul(a, b);
    let out = reduce::reduce(&mut wide);
    wide.zeroize();
    out
}

/// Multiply two encoded field elements.
///
/// Total and constant-time; both operands and the result use the 32-byte
/// little-endian encoding.
pub fn mul_bytes(
    a: &[u8; GF2_256_FIELD_ELEMENT_SIZE],
    b: &[u8; GF2_256_FIELD_ELEMENT_SIZE],
) -> [u8; GF2_256_FIELD_ELEMENT_SIZE] {
    let mut aw = pack(a);
    let mut bw = pack(b);
    let mut cw = mul_words(&aw, &bw);
    let out = unpack(&cw);
    aw.zeroize();
    bw.zeroize();
    cw.zeroize();
    out
}

/// Multiply two field elements given as byte slices.
///
/// Both slices must be exactly 32 bytes; any other length is rejected with
/// [`Error::Length`](crate::error::Error::Length) before any arithmetic
/// happens. Inputs are never padded or truncated.
pub fn multiply(a: &[u8], b: &[u8]) -> Result<[u8; GF2_256_FIELD_ELEMENT_SIZE]> {
    let a = validate::exact::<GF2_256_FIELD_ELEMENT_SIZE>("GF(2^256) left operand", a)?;
    let b = validate::exact::<GF2_256_FIELD_ELEMENT_SIZE>("GF(2^256) right operand", b)?;
    Ok(mul_bytes(a, b))
}

/// GF(2^256) as a [`BinaryFieldMultiplier`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryField256;

impl BinaryFieldMultiplier for BinaryField256 {
    const ELEMENT_SIZE: usize = GF2_256_FIELD_ELEMENT_SIZE;

    type Element = [u8; GF2_256_FIELD_ELEMENT_SIZE];

    fn name() -> &'static str {
        "GF(2^256)"
    }

    fn multiply(a: &[u8], b: &[u8]) -> CoreResult<Self::Element> {
        multiply(a, b).map_err(CoreError::from)
    }
}
