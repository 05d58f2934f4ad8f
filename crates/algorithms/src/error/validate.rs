//! Validation utilities for field primitives

use super::{Error, Result};

#[cold]
fn length_error(context: &'static str, expected: usize, actual: usize) -> Error {
    // lengths are public; never log operand contents
    tracing::debug!(context, expected, actual, "rejected input of wrong length");
    Error::Length {
        context,
        expected,
        actual,
    }
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(length_error(context, expected, actual));
    }
    Ok(())
}

/// Borrow `bytes` as a fixed-size array, failing if its length is not `N`
#[inline(always)]
pub fn exact<'a, const N: usize>(context: &'static str, bytes: &'a [u8]) -> Result<&'a [u8; N]> {
    <&[u8; N]>::try_from(bytes).map_err(|_| length_error(context, N, bytes.len()))
}
