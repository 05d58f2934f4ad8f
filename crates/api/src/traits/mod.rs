//! Trait definitions for binary field arithmetic

pub mod field;

pub use field::BinaryFieldMultiplier;
