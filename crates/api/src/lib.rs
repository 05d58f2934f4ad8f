//! Public API traits and types for the binfield library
//!
//! This crate provides the public API surface shared by the binfield crates:
//! the error type returned at input boundaries and the trait implemented by
//! every binary field multiplier.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::BinaryFieldMultiplier;
