//! Internal utilities for the binfield library
//!
//! Not a stable API; items here exist to be shared between the binfield
//! crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_mask_u64, ct_xor};
