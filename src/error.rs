//! Error types for the 3-Way library.
//!
//! The cipher itself never fails; only the byte-level helpers in
//! [`utils::converter`](crate::utils::converter) validate their inputs.

use std::fmt;

/// Errors produced by the 3-Way library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreeWayError {
    /// Key byte slice is not exactly 12 bytes (96 bits).
    InvalidKeyLength,
    /// Byte array length is not a multiple of the 12-byte block size.
    InvalidByteArrayLength,
}

impl fmt::Display for ThreeWayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreeWayError::InvalidKeyLength => {
                write!(f, "Key must be exactly 12 bytes long")
            }
            ThreeWayError::InvalidByteArrayLength => {
                write!(f, "Byte array length is not a multiple of 12")
            }
        }
    }
}

impl std::error::Error for ThreeWayError {}
