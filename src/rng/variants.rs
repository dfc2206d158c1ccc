//! Fixed-round generator types for `rand_core` integration.
//!
//! `SeedableRng` needs the round count at the type level, so each standard
//! variant gets a thin wrapper around [`ChaChaRng`]. The wrappers deref to
//! the inner generator, which keeps seeking and stream selection available.

use std::ops::{Deref, DerefMut};

use rand_core::{CryptoRng, Error, RngCore, SeedableRng};

use super::permutation::Rounds;
use super::stream::ChaChaRng;

macro_rules! fixed_round_rng {
    ($name:ident, $rounds:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(ChaChaRng);

        impl $name {
            /// Unwraps the runtime-round generator.
            pub fn into_inner(self) -> ChaChaRng {
                self.0
            }
        }

        impl SeedableRng for $name {
            type Seed = [u8; 32];

            #[inline]
            fn from_seed(seed: Self::Seed) -> Self {
                Self(ChaChaRng::from_key(seed, $rounds))
            }
        }

        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                self.0.next_u32()
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                self.0.next_u64()
            }

            #[inline]
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                self.0.fill_bytes(dest)
            }

            #[inline]
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.0.fill_bytes(dest);
                Ok(())
            }
        }

        impl CryptoRng for $name {}

        impl Deref for $name {
            type Target = ChaChaRng;

            fn deref(&self) -> &ChaChaRng {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut ChaChaRng {
                &mut self.0
            }
        }

        impl From<$name> for ChaChaRng {
            fn from(rng: $name) -> ChaChaRng {
                rng.0
            }
        }
    };
}

fixed_round_rng!(ChaCha8Rng, Rounds::R8, "ChaCha generator with 8 rounds.");
fixed_round_rng!(ChaCha12Rng, Rounds::R12, "ChaCha generator with 12 rounds.");
fixed_round_rng!(ChaCha20Rng, Rounds::R20, "ChaCha generator with 20 rounds.");
