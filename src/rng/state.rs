//! Persisted generator state.
//!
//! A generator is fully described by its key, stream identifier, absolute
//! word position and round count. The output buffer is never stored: it is
//! regenerated from those fields on restore.

use super::permutation::Rounds;

/// Snapshot of a [`ChaChaRng`](super::ChaChaRng) that can be stored and
/// later restored.
///
/// With the `serde` feature enabled this type implements `Serialize` and
/// `Deserialize`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamState {
    /// 256-bit key.
    pub key: [u8; 32],
    /// 64-bit stream identifier.
    pub stream: u64,
    /// Absolute position of the next word, 68 bits significant.
    pub word_pos: u128,
    /// Round count.
    pub rounds: Rounds,
}
