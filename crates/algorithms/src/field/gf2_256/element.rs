//! GF(2^256) field element

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::{GF2_256_FIELD_ELEMENT_SIZE, NWORDS};
use super::pack::{pack, unpack};
use crate::error::{validate, Result};

/// Element of GF(2^256) = GF(2)[X] / (X^256 + X^10 + X^5 + X^2 + 1).
///
/// Internally stored as four little-endian 64-bit words; coefficient of
/// X^i is bit `i % 64` of word `i / 64`. Every bit pattern is a valid,
/// fully reduced element.
#[derive(Clone, Copy, Default, Zeroize)]
pub struct FieldElement(pub(crate) [u64; NWORDS]);

impl FieldElement {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u64; NWORDS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        FieldElement([1, 0, 0, 0])
    }

    /// Decode from the 32-byte little-endian encoding.
    pub fn from_bytes(bytes: &[u8; GF2_256_FIELD_ELEMENT_SIZE]) -> Self {
        FieldElement(pack(bytes))
    }

    /// Decode from a byte slice, which must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = validate::exact::<GF2_256_FIELD_ELEMENT_SIZE>("GF(2^256) element", bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encode as 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; GF2_256_FIELD_ELEMENT_SIZE] {
        unpack(&self.0)
    }

    /// Sample a uniformly random element.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; GF2_256_FIELD_ELEMENT_SIZE];
        rng.fill_bytes(&mut bytes);
        let fe = Self::from_bytes(&bytes);
        bytes.zeroize();
        fe
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Field multiplication: (self * other) mod f
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(super::mul_words(&self.0, &other.0))
    }

    /// Field squaring: (self²) mod f
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NWORDS];
        for (i, w) in out.iter_mut().enumerate() {
            *w = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl From<[u8; GF2_256_FIELD_ELEMENT_SIZE]> for FieldElement {
    fn from(bytes: [u8; GF2_256_FIELD_ELEMENT_SIZE]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<FieldElement> for [u8; GF2_256_FIELD_ELEMENT_SIZE] {
    fn from(fe: FieldElement) -> Self {
        fe.to_bytes()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 2 * GF2_256_FIELD_ELEMENT_SIZE];
        hex::encode_to_slice(self.to_bytes(), &mut buf).map_err(|_| fmt::Error)?;
        let s = core::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        write!(f, "FieldElement({})", s)
    }
}
