//! Binary field arithmetic
//!
//! Fields of characteristic two, GF(2^m), represented as polynomials over
//! GF(2) reduced modulo a fixed irreducible polynomial of degree m.

pub mod gf2_256;

pub use gf2_256::{BinaryField256, FieldElement};
