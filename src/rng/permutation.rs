//! ChaCha permutation core
//!
//! This module provides the ChaCha permutation as a pure function over a
//! 16-word state. It performs no feed-forward addition and keeps no state
//! of its own; the block generator in [`super::block`] builds the keystream
//! on top of it.
//!
//! The permutation is parameterised by the number of rounds. ChaCha20 is
//! the conservative, RFC 8439 setting; ChaCha12 and ChaCha8 are the reduced
//! variants from Bernstein's original paper.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::error::ChaChaError;

/// ChaCha constant words.
///
/// These values correspond to the ASCII string:
/// `"expand 32-byte k"` encoded as little-endian `u32` words.
pub(crate) const CHACHA_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of 32-bit words in the ChaCha state and in one output block.
pub const STATE_WORDS: usize = 16;

/// Round count of the ChaCha permutation.
///
/// Only the three standard variants are representable, so a `Rounds` value
/// is always valid once constructed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounds {
    /// ChaCha8: 4 double-rounds.
    R8,
    /// ChaCha12: 6 double-rounds.
    R12,
    /// ChaCha20: 10 double-rounds.
    #[default]
    R20,
}

impl Rounds {
    /// Total number of rounds (8, 12 or 20).
    pub const fn count(self) -> u32 {
        match self {
            Rounds::R8 => 8,
            Rounds::R12 => 12,
            Rounds::R20 => 20,
        }
    }

    /// Number of column + diagonal double-rounds applied per block.
    pub const fn double_rounds(self) -> usize {
        (self.count() / 2) as usize
    }
}

impl TryFrom<u32> for Rounds {
    type Error = ChaChaError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Rounds::R8),
            12 => Ok(Rounds::R12),
            20 => Ok(Rounds::R20),
            other => Err(ChaChaError::InvalidRounds(other)),
        }
    }
}

impl Display for Rounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ChaCha{}", self.count())
    }
}

/// Performs one ChaCha quarter round.
///
/// A quarter round mixes four 32-bit words of the internal state using
/// addition modulo 2³², XOR, and fixed left rotations.
#[inline(always)]
fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies `count` iterations of the ChaCha double-round in place.
///
/// Each iteration performs:
/// - 4 column quarter rounds
/// - 4 diagonal quarter rounds
#[inline]
pub(crate) fn apply_double_rounds(state: &mut [u32; STATE_WORDS], count: usize) {
    for _ in 0..count {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Runs the ChaCha permutation on a copy of `state`.
///
/// The input is left untouched. No feed-forward addition is performed: the
/// returned words are the raw permutation output.
pub fn permute(state: &[u32; STATE_WORDS], rounds: Rounds) -> [u32; STATE_WORDS] {
    let mut out = *state;
    apply_double_rounds(&mut out, rounds.double_rounds());
    out
}
