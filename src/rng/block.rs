//! ChaCha keystream block generator
//!
//! [`BlockCore`] owns the 16-word ChaCha state and turns it into keystream
//! blocks with the classic add-permute-add construction:
//!
//! ```text
//! constant  constant  constant  constant
//! key       key       key       key
//! key       key       key       key
//! counter   counter   stream    stream
//! ```
//!
//! The block counter is a single 64-bit quantity split across words 12
//! and 13; the stream identifier occupies words 14 and 15. Constants and
//! key words never change after construction.
//!
//! Every call produces [`BUFFER_BLOCKS`] consecutive blocks and advances the
//! counter by the same amount.

use log::trace;

use super::error::ChaChaError;
use super::permutation::{CHACHA_CONSTANTS, Rounds, STATE_WORDS, apply_double_rounds};

/// Number of blocks produced per generator call.
pub const BUFFER_BLOCKS: usize = 4;

/// Number of 32-bit words produced per generator call.
pub const BUFFER_WORDS: usize = BUFFER_BLOCKS * STATE_WORDS;

/// Raw ChaCha block generator.
///
/// This type exposes the keystream one batch of four blocks at a time and
/// has no notion of a read cursor. Most callers want
/// [`ChaChaRng`](super::ChaChaRng), which buffers this output.
#[derive(Clone)]
pub struct BlockCore {
    state: [u32; STATE_WORDS],
    rounds: Rounds,
}

impl BlockCore {
    /// Creates a block generator from a key, an initial block counter and
    /// a stream identifier.
    pub fn new(key: &[u8; 32], counter: u64, stream: u64, rounds: Rounds) -> Self {
        let mut state = [0u32; STATE_WORDS];

        // Constants
        state[0..4].copy_from_slice(&CHACHA_CONSTANTS);

        // Key (256-bit, as little-endian words)
        state[4..12]
            .iter_mut()
            .zip(key.chunks_exact(4))
            .for_each(|(s, k)| *s = u32::from_le_bytes([k[0], k[1], k[2], k[3]]));

        let mut core = Self { state, rounds };
        core.set_counter(counter);
        core.set_stream(stream);
        core
    }

    /// Round count this generator was built with.
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Current 64-bit block counter: the index of the next block to be
    /// produced.
    pub fn counter(&self) -> u64 {
        (u64::from(self.state[13]) << 32) | u64::from(self.state[12])
    }

    /// Sets the 64-bit block counter.
    pub fn set_counter(&mut self, counter: u64) {
        self.state[12] = counter as u32;
        self.state[13] = (counter >> 32) as u32;
    }

    /// Current 64-bit stream identifier.
    pub fn stream(&self) -> u64 {
        (u64::from(self.state[15]) << 32) | u64::from(self.state[14])
    }

    /// Sets the 64-bit stream identifier.
    ///
    /// This does not touch the counter; buffered consumers are responsible
    /// for keeping their read position consistent.
    pub fn set_stream(&mut self, stream: u64) {
        self.state[14] = stream as u32;
        self.state[15] = (stream >> 32) as u32;
    }

    /// Returns the 256-bit key as little-endian bytes.
    pub fn seed(&self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.chunks_exact_mut(4)
            .zip(&self.state[4..12])
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));
        seed
    }

    /// Writes the next [`BUFFER_BLOCKS`] keystream blocks into `out`.
    ///
    /// # Errors
    /// Returns [`ChaChaError::BufferLength`] if `out` is not exactly
    /// [`BUFFER_WORDS`] words long. The state is left unchanged in that case.
    pub fn generate(&mut self, out: &mut [u32]) -> Result<(), ChaChaError> {
        let actual = out.len();
        let out: &mut [u32; BUFFER_WORDS] =
            out.try_into().map_err(|_| ChaChaError::BufferLength {
                expected: BUFFER_WORDS,
                actual,
            })?;

        self.refill(out);

        Ok(())
    }

    /// Fills a full buffer with keystream and advances the counter.
    pub(crate) fn refill(&mut self, out: &mut [u32; BUFFER_WORDS]) {
        for block in out.chunks_exact_mut(STATE_WORDS) {
            // Preserve original state for feed-forward
            let mut working = self.state;
            apply_double_rounds(&mut working, self.rounds.double_rounds());

            block
                .iter_mut()
                .zip(working.iter().zip(&self.state))
                .for_each(|(o, (w, s))| *o = w.wrapping_add(*s));

            self.set_counter(self.counter().wrapping_add(1));
        }

        trace!(
            "{} refill: stream {:#x}, next block {:#x}",
            self.rounds,
            self.stream(),
            self.counter()
        );
    }
}
