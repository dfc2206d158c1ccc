//! Deterministic ChaCha word streams
//!
//! This crate provides a reproducible pseudo-random word generator built on
//! the ChaCha permutation (8, 12 or 20 rounds). A 256-bit key and a 64-bit
//! or 96-bit nonce select an effectively infinite keystream, which is
//! exposed as a buffered, seekable stream of 32-bit and 64-bit words.
//!
//! Typical uses are seeded simulations, deterministic tests, and
//! reproducible key-stream expansion.
//!
//! # Module overview
//!
//! - `rng`
//!   The ChaCha permutation, the keystream block generator and the
//!   buffered [`ChaChaRng`](rng::ChaChaRng) with word positions, stream
//!   switching, cloning and persisted state. Fixed-round wrappers implement
//!   `rand_core::SeedableRng`.
//!
//! - `range`
//!   Bounded sampling on top of any `rand_core::RngCore`: unbiased 32-bit
//!   ranges, Canon's method for 64-bit ranges, and floats in `[low, high)`.
//!
//! # Scope
//!
//! This crate is **not** an authenticated-encryption construction, a key
//! derivation function, or a forward-secure RNG. It is a pure deterministic
//! expansion function: anyone holding the key can reproduce every output.
//!
//! # Logging
//!
//! Construction, refills, seeks and stream switches are reported through
//! the `log` facade at `debug` and `trace` level. No logger is installed.

pub mod range;
pub mod rng;
