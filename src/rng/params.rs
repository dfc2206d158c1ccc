//! Construction parameters and their validation.
//!
//! Keys and nonces often arrive as runtime byte slices (configuration
//! files, wire messages). This module checks their lengths and decodes the
//! nonce into the initial block counter and stream identifier.

use super::error::ChaChaError;
use super::permutation::Rounds;

/// Required key length in bytes.
pub const KEY_LEN: usize = 32;

/// Length in bytes of a 64-bit (original ChaCha) nonce.
pub const NONCE_LEN: usize = 8;

/// Length in bytes of a 96-bit (IETF) nonce.
pub const IETF_NONCE_LEN: usize = 12;

/// Runtime construction parameters for a ChaCha generator.
///
/// # Nonce layout
///
/// - 8 bytes: the little-endian stream identifier; the counter starts at 0.
/// - 12 bytes: the first 4 bytes are the low half of the block counter,
///   the remaining 8 bytes are the stream identifier. All little-endian.
#[derive(Clone, Debug)]
pub struct StreamParams {
    /// Key material, must be exactly 32 bytes.
    pub key: Vec<u8>,
    /// Nonce, 8 or 12 bytes.
    pub nonce: Vec<u8>,
    /// Round count, one of 8, 12 or 20.
    pub rounds: u32,
}

impl StreamParams {
    /// Checks every field and returns the decoded key, counter, stream and
    /// round count.
    pub(crate) fn validate(&self) -> Result<([u8; KEY_LEN], u64, u64, Rounds), ChaChaError> {
        let key = parse_key(&self.key)?;
        let (counter, stream) = parse_nonce(&self.nonce)?;
        let rounds = Rounds::try_from(self.rounds)?;

        Ok((key, counter, stream, rounds))
    }
}

impl Default for StreamParams {
    /// All-zero key and 8-byte nonce, 20 rounds.
    fn default() -> Self {
        Self {
            key: vec![0u8; KEY_LEN],
            nonce: vec![0u8; NONCE_LEN],
            rounds: Rounds::default().count(),
        }
    }
}

pub(crate) fn parse_key(key: &[u8]) -> Result<[u8; KEY_LEN], ChaChaError> {
    key.try_into()
        .map_err(|_| ChaChaError::InvalidKeyLength(key.len()))
}

/// Splits a nonce into `(counter, stream)`.
pub(crate) fn parse_nonce(nonce: &[u8]) -> Result<(u64, u64), ChaChaError> {
    match nonce.len() {
        NONCE_LEN => Ok((0, read_u64_le(nonce))),
        IETF_NONCE_LEN => {
            let counter = u32::from_le_bytes([nonce[0], nonce[1], nonce[2], nonce[3]]);
            Ok((u64::from(counter), read_u64_le(&nonce[4..])))
        }
        len => Err(ChaChaError::InvalidNonceLength(len)),
    }
}

fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}
