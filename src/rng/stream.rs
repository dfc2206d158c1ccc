//! Buffered, seekable ChaCha word stream
//!
//! This module implements the generator most callers use. It wraps the raw
//! [`BlockCore`] with a 64-word buffer (four blocks) and a read cursor, and
//! translates between that buffer and an absolute *word position* in the
//! infinite keystream selected by the key and stream identifier.
//!
//! The generator is fully deterministic:
//! - the same key, nonce and round count always yield the same words
//! - seeking to a position yields exactly the words sequential reading
//!   would have produced there
//! - clones are independent deep copies
//!
//! It is **not** an encryption primitive and provides no forward secrecy:
//! the key stays in memory for the lifetime of the generator.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use log::{debug, trace};
use rand_core::{CryptoRng, Error, RngCore};

use super::block::{BUFFER_BLOCKS, BUFFER_WORDS, BlockCore};
use super::error::ChaChaError;
use super::params::{StreamParams, parse_key, parse_nonce};
use super::permutation::{Rounds, STATE_WORDS};
use super::seed::expand_u64;
use super::state::StreamState;

/// Word positions are 68-bit values: a 64-bit block index and a 4-bit
/// offset inside the block.
pub const WORD_POS_BITS: u32 = 68;

/// Deterministic ChaCha random word generator.
///
/// Output is produced four blocks at a time into an internal buffer and
/// handed out as 32-bit words, 64-bit double words or bytes.
///
/// The position of the next word can be read with
/// [`get_word_pos`](Self::get_word_pos) and changed with
/// [`set_word_pos`](Self::set_word_pos); switching streams with
/// [`set_stream`](Self::set_stream) keeps that position.
#[derive(Clone)]
pub struct ChaChaRng {
    /// Block generator. Its counter points one past the buffered blocks.
    core: BlockCore,

    /// Keystream of the last refill.
    buffer: [u32; BUFFER_WORDS],

    /// Next unread word in `buffer`; `BUFFER_WORDS` when exhausted.
    index: usize,
}

impl ChaChaRng {
    /// Creates a generator from a 32-byte key and an 8- or 12-byte nonce.
    ///
    /// # Errors
    /// Returns [`ChaChaError::InvalidKeyLength`] or
    /// [`ChaChaError::InvalidNonceLength`] when the inputs have the wrong
    /// size.
    pub fn new(key: &[u8], nonce: &[u8], rounds: Rounds) -> Result<Self, ChaChaError> {
        let key = parse_key(key)?;
        let (counter, stream) = parse_nonce(nonce)?;

        Ok(Self::from_core(BlockCore::new(&key, counter, stream, rounds)))
    }

    /// Creates a generator from runtime parameters.
    pub fn from_params(params: &StreamParams) -> Result<Self, ChaChaError> {
        let (key, counter, stream, rounds) = params.validate()?;

        Ok(Self::from_core(BlockCore::new(&key, counter, stream, rounds)))
    }

    /// Creates a generator on stream 0, positioned at word 0.
    pub fn from_key(key: [u8; 32], rounds: Rounds) -> Self {
        Self::from_core(BlockCore::new(&key, 0, 0, rounds))
    }

    /// Creates a generator whose key is expanded from a 64-bit seed.
    ///
    /// This is meant for reproducible simulations and tests. Distinct seeds
    /// give distinct keys, but a 64-bit seed carries at most 64 bits of
    /// entropy.
    pub fn from_u64_seed(seed: u64, rounds: Rounds) -> Self {
        Self::from_key(expand_u64(seed), rounds)
    }

    /// Rebuilds a generator from a persisted [`StreamState`].
    ///
    /// The key is loaded first, then the stream is selected, then the word
    /// position is restored.
    pub fn restore(state: &StreamState) -> Self {
        let mut rng = Self::from_key(state.key, state.rounds);
        rng.set_stream(state.stream);
        rng.set_word_pos(state.word_pos);
        rng
    }

    fn from_core(core: BlockCore) -> Self {
        debug!(
            "new {} generator: stream {:#x}, counter {:#x}",
            core.rounds(),
            core.stream(),
            core.counter()
        );

        Self {
            core,
            buffer: [0u32; BUFFER_WORDS],
            index: BUFFER_WORDS,
        }
    }

    /// Captures the key, stream, word position and round count.
    pub fn snapshot(&self) -> StreamState {
        StreamState {
            key: self.get_seed(),
            stream: self.get_stream(),
            word_pos: self.get_word_pos(),
            rounds: self.rounds(),
        }
    }

    /// Round count this generator was built with.
    pub fn rounds(&self) -> Rounds {
        self.core.rounds()
    }

    /// Returns the 256-bit key.
    pub fn get_seed(&self) -> [u8; 32] {
        self.core.seed()
    }

    /// Returns the 64-bit stream identifier.
    pub fn get_stream(&self) -> u64 {
        self.core.stream()
    }

    /// Selects another stream while keeping the current word position.
    ///
    /// Buffered words from the old stream that have not been read yet are
    /// discarded; the next word comes from the new stream at the position
    /// [`get_word_pos`](Self::get_word_pos) reported before the switch.
    pub fn set_stream(&mut self, stream: u64) {
        let pos = self.get_word_pos();

        self.core.set_stream(stream);
        self.set_word_pos(pos);

        trace!("switched to stream {stream:#x} at word {pos:#x}");
    }

    /// Returns the absolute index, in 32-bit words, of the next word.
    ///
    /// The result is a 68-bit value: the 64-bit block index times 16 plus
    /// the offset inside the block. It wraps to 0 together with the block
    /// counter.
    pub fn get_word_pos(&self) -> u128 {
        let buffer_start = self.core.counter().wrapping_sub(BUFFER_BLOCKS as u64);
        let block = buffer_start.wrapping_add((self.index / STATE_WORDS) as u64);

        (u128::from(block) << 4) | (self.index % STATE_WORDS) as u128
    }

    /// Moves to an absolute word position.
    ///
    /// Only the low 68 bits of `word_offset` are used. The buffer is
    /// refilled immediately, so any unread words are discarded.
    pub fn set_word_pos(&mut self, word_offset: u128) {
        self.core.set_counter((word_offset >> 4) as u64);
        self.refill();
        self.index = (word_offset as usize) & (STATE_WORDS - 1);

        trace!("seek to word {:#x}", word_offset & ((1u128 << WORD_POS_BITS) - 1));
    }

    /// Returns the next 32-bit word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= BUFFER_WORDS {
            self.refill();
        }

        let value = self.buffer[self.index];
        self.index += 1;
        value
    }

    /// Returns the next two words as a 64-bit value, low word first.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());

        (high << 32) | low
    }

    /// Fills `dest` with keystream bytes in little-endian word order.
    ///
    /// Each started word is retired from the stream: after writing a
    /// length that is not a multiple of 4, the unused bytes of the last
    /// word are skipped and the word position moves past it.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut filled = 0;

        while filled < dest.len() {
            if self.index >= BUFFER_WORDS {
                self.refill();
            }

            let (consumed, written) = copy_words(&self.buffer[self.index..], &mut dest[filled..]);

            self.index += consumed;
            filled += written;
        }
    }

    fn refill(&mut self) {
        self.core.refill(&mut self.buffer);
        self.index = 0;
    }
}

/// Copies as many little-endian words as fit into `dest`.
///
/// Returns `(words consumed, bytes written)`; a trailing partial word counts
/// as consumed.
fn copy_words(src: &[u32], dest: &mut [u8]) -> (usize, usize) {
    let mut consumed = 0;
    let mut written = 0;

    for (word, chunk) in src.iter().zip(dest.chunks_mut(4)) {
        let bytes = word.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);

        consumed += 1;
        written += chunk.len();
    }

    (consumed, written)
}

impl RngCore for ChaChaRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        ChaChaRng::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        ChaChaRng::next_u64(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        ChaChaRng::fill_bytes(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        ChaChaRng::fill_bytes(self, dest);
        Ok(())
    }
}

impl CryptoRng for ChaChaRng {}

impl Default for ChaChaRng {
    /// All-zero key, stream 0, 20 rounds.
    fn default() -> Self {
        Self::from_key([0u8; 32], Rounds::R20)
    }
}

// Key and buffer contents stay out of debug output.
impl Debug for ChaChaRng {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ChaChaRng")
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}

impl PartialEq for ChaChaRng {
    fn eq(&self, other: &Self) -> bool {
        self.rounds() == other.rounds()
            && self.get_seed() == other.get_seed()
            && self.get_stream() == other.get_stream()
            && self.get_word_pos() == other.get_word_pos()
    }
}

impl Eq for ChaChaRng {}
