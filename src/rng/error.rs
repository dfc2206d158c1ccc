//! Errors reported by the ChaCha generator.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors that can occur while constructing or driving a ChaCha generator.
///
/// Construction errors are reported before any object exists, so a failed
/// call never leaves a half-initialized generator behind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChaChaError {
    /// The key was not exactly 32 bytes long.
    InvalidKeyLength(usize),

    /// The nonce was neither 8 nor 12 bytes long.
    InvalidNonceLength(usize),

    /// The round count was not one of 8, 12 or 20.
    InvalidRounds(u32),

    /// A raw block-generation buffer did not have the required word count.
    BufferLength {
        /// Number of words the block generator writes per call.
        expected: usize,
        /// Number of words the caller supplied.
        actual: usize,
    },
}

impl Display for ChaChaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ChaChaError::InvalidKeyLength(len) => {
                write!(f, "key must be 32 bytes, got {len}")
            }
            ChaChaError::InvalidNonceLength(len) => {
                write!(f, "nonce must be 8 or 12 bytes, got {len}")
            }
            ChaChaError::InvalidRounds(rounds) => {
                write!(f, "rounds must be 8, 12 or 20, got {rounds}")
            }
            ChaChaError::BufferLength { expected, actual } => {
                write!(f, "block buffer must hold {expected} words, got {actual}")
            }
        }
    }
}

impl std::error::Error for ChaChaError {}
