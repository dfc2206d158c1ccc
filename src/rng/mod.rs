//! ChaCha random word generation
//!
//! This module turns the ChaCha permutation into a deterministic,
//! seekable stream of 32-bit words.
//!
//! It is layered bottom-up:
//! - `permutation`: the pure ChaCha double-round transform
//! - `block`: the add-permute-add keystream block generator
//! - `stream`: the buffered generator with word positions and streams
//!
//! Design goals:
//! - Bit-exact agreement with the published ChaCha test vectors
//! - Random access to any word of any stream
//! - No heap allocation
//! - Value semantics: cloning yields an independent generator
mod block;
mod error;
mod params;
mod permutation;
mod seed;
mod state;
mod stream;
mod variants;

pub use block::{BUFFER_BLOCKS, BUFFER_WORDS, BlockCore};
pub use error::ChaChaError;
pub use params::{IETF_NONCE_LEN, KEY_LEN, NONCE_LEN, StreamParams};
pub use permutation::{Rounds, STATE_WORDS, permute};
pub use state::StreamState;
pub use stream::{ChaChaRng, WORD_POS_BITS};
pub use variants::{ChaCha8Rng, ChaCha12Rng, ChaCha20Rng};
