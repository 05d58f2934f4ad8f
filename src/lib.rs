//! # binfield
//!
//! Constant-time multiplication in the binary field GF(2^256), defined by the
//! irreducible polynomial f(X) = X^256 + X^10 + X^5 + X^2 + 1.
//!
//! ## Usage
//!
//! ```
//! use binfield::prelude::*;
//!
//! let mut three = [0u8; 32];
//! three[0] = 0x03;
//! let mut five = [0u8; 32];
//! five[0] = 0x05;
//!
//! // (X + 1)(X^2 + 1) = X^3 + X^2 + X + 1
//! let product = multiply(&three, &five)?;
//! assert_eq!(product[0], 0x0f);
//!
//! // anything but 32 bytes is rejected
//! assert!(multiply(&three[..31], &five).is_err());
//!
//! // the same multiplication through the generic trait
//! assert_eq!(BinaryField256::multiply(&three, &five)?, product);
//! # Ok::<(), CoreError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` implementations
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`binfield-api`]: error type and the `BinaryFieldMultiplier` trait
//! - [`binfield-internal`]: constant-time helpers
//! - [`binfield-algorithms`]: the GF(2^256) implementation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports
pub use binfield_algorithms as algorithms;
pub use binfield_api as api;
pub use binfield_internal as internal;

pub use subtle;
pub use zeroize;

/// Common imports for binfield users
pub mod prelude {
    pub use crate::api::{BinaryFieldMultiplier, Error as CoreError, Result as CoreResult};

    pub use crate::algorithms::{
        mul_bytes, multiply, BinaryField256, Error, FieldElement, Result,
        GF2_256_FIELD_ELEMENT_SIZE,
    };
}
