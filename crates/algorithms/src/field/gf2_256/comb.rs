//! Right-to-left comb multiplication of GF(2)[X] polynomials
//! (Hankerson, Menezes, Vanstone, Algorithm 2.34) with W = 64, t = 4.

use core::sync::atomic::{compiler_fence, Ordering};

use binfield_internal::constant_time::ct_mask_u64;
use zeroize::Zeroize;

use super::constants::{NWORDS, WORD_BITS};

/// Carry-less product of two 256-bit polynomials as eight words.
///
/// Every bit of `a` is visited exactly once and each visit performs the
/// same masked XOR of the shifted copy of `b`, so the operation count and
/// memory access pattern do not depend on either operand.
pub(crate) fn comb_mul(a: &[u64; NWORDS], b: &[u64; NWORDS]) -> [u64; 2 * NWORDS] {
    let mut c = [0u64; 2 * NWORDS];

    // b shifted left by k bits; one extra word catches the overflow
    let mut shifted = [0u64; NWORDS + 1];
    shifted[..NWORDS].copy_from_slice(b);

    for k in 0..WORD_BITS {
        for j in 0..NWORDS {
            // all-ones iff bit k of a[j] is set
            let mask = ct_mask_u64(a[j] >> k);
            for i in 0..=NWORDS {
                c[j + i] ^= shifted[i] & mask;
            }
        }
        shl1(&mut shifted);
    }

    compiler_fence(Ordering::SeqCst);
    shifted.zeroize();

    c
}

/// Shift a 5-word little-endian buffer left by one bit.
#[inline(always)]
fn shl1(buf: &mut [u64; NWORDS + 1]) {
    for i in (1..=NWORDS).rev() {
        buf[i] = (buf[i] << 1) | (buf[i - 1] >> (WORD_BITS - 1));
    }
    buf[0] <<= 1;
}
