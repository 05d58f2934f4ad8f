//! Constant-time operations to prevent timing attacks

use core::hint::black_box;

/// Word-wide mask from the low bit of `bit`
///
/// Returns `u64::MAX` if the low bit is set and `0` otherwise, computed as
/// the two's-complement negation of the isolated bit. The isolated bit is
/// passed through [`black_box`] so the optimizer cannot recognise the
/// select and lower it to a branch.
#[inline(always)]
pub fn ct_mask_u64(bit: u64) -> u64 {
    black_box(bit & 1).wrapping_neg()
}

/// Apply a constant-time bitwise XOR operation between two arrays
pub fn ct_xor<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for i in 0..N {
        result[i] = a[i] ^ b[i];
    }
    result
}
