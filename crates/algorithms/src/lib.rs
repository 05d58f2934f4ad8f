//! Binary field primitives with constant-time implementation
//!
//! This crate provides arithmetic in binary extension fields with a focus on
//! constant-time operation and resistance to timing side channels. The
//! library is usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Branch-free, fixed-access-pattern multiplication
//! - Zeroization of intermediate products
//! - Length validation at byte-slice boundaries, outside the arithmetic

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary field arithmetic
pub mod field;
pub use field::gf2_256::{
    mul_bytes, multiply, BinaryField256, FieldElement, GF2_256_FIELD_ELEMENT_SIZE,
};
