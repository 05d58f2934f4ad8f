//! Reduction modulo f(X) = X^256 + X^10 + X^5 + X^2 + 1
//!
//! A variant of the word-level fast reduction of Hankerson, Menezes and
//! Vanstone (Figure 2.9). Because 256 is a multiple of the word width, word
//! `c[i]` for `i >= 4` stands for `c[i] * X^(64 (i - 4)) * X^256`, and
//! `X^256 ≡ X^10 + X^5 + X^2 + 1`. So `c[i]` folds into `c[i - 4]` shifted
//! left by each tail exponent, and into `c[i - 3]` shifted right by the
//! complement `64 - e` for the bits that cross the word boundary.

use super::constants::{GF2_256_MODULUS_TAIL, NWORDS, WORD_BITS};

/// Reduce a 512-bit carry-less product to a 256-bit field element.
///
/// Words are folded from the top down. Folding `c[7]` writes into `c[4]`,
/// which is folded afterwards; folding `c[4]` only touches `c[0]` and
/// `c[1]`, so one pass leaves a fully reduced value in `c[0..4]`. The upper
/// half of `c` is left as scratch.
pub(crate) fn reduce(c: &mut [u64; 2 * NWORDS]) -> [u64; NWORDS] {
    for i in (NWORDS..2 * NWORDS).rev() {
        let hi = c[i];

        // the constant term of the tail
        let mut low = hi;
        let mut carry = 0u64;
        for &e in GF2_256_MODULUS_TAIL.iter() {
            low ^= hi << e;
            carry ^= hi >> (WORD_BITS - e);
        }

        c[i - NWORDS] ^= low;
        c[i - NWORDS + 1] ^= carry;
    }

    let mut out = [0u64; NWORDS];
    out.copy_from_slice(&c[..NWORDS]);
    out
}
