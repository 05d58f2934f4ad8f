//! Shared constants for GF(2^256) operations

/// Size of a GF(2^256) field element in bytes (256 bits -> 32 bytes)
pub const GF2_256_FIELD_ELEMENT_SIZE: usize = 32;

/// Degree of the field polynomial f(X) = X^256 + X^10 + X^5 + X^2 + 1
pub const GF2_256_MODULUS_DEGREE: usize = 256;

/// Exponents of the non-constant terms of f(X) - X^256, highest first
///
/// Together with the constant term these give X^256 ≡ X^10 + X^5 + X^2 + 1.
/// Every exponent must stay below the word width, which is what lets the
/// reduction fold each overflow word in a single pass.
pub const GF2_256_MODULUS_TAIL: [u32; 3] = [10, 5, 2];

/// Machine word width in bits
pub(crate) const WORD_BITS: u32 = u64::BITS;

/// Number of 64-bit words in a field element (4 × 64 = 256 bits)
pub(crate) const NWORDS: usize = GF2_256_MODULUS_DEGREE / WORD_BITS as usize;
