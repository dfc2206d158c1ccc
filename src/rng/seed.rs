//! Key expansion from a 64-bit integer seed.
//!
//! This is a convenience seeding path for simulations and tests, not a key
//! derivation function. A small PCG32 generator is stepped eight times and
//! each 32-bit output becomes one little-endian key word.
//!
//! The expansion matches `rand_core::SeedableRng::seed_from_u64`, so a
//! generator seeded here agrees with the `SeedableRng` types of this crate.

const PCG_MUL: u64 = 6_364_136_223_846_793_005;
const PCG_INC: u64 = 11_634_580_027_462_260_723;

/// Advances the PCG32 state and returns the next output word.
#[inline]
fn pcg32(state: &mut u64) -> u32 {
    *state = state.wrapping_mul(PCG_MUL).wrapping_add(PCG_INC);
    let s = *state;

    let xorshifted = (((s >> 18) ^ s) >> 27) as u32;
    let rot = (s >> 59) as u32;

    xorshifted.rotate_right(rot)
}

/// Expands a 64-bit seed into a 256-bit key.
pub(crate) fn expand_u64(seed: u64) -> [u8; 32] {
    let mut state = seed;
    let mut key = [0u8; 32];

    for chunk in key.chunks_exact_mut(4) {
        chunk.copy_from_slice(&pcg32(&mut state).to_le_bytes());
    }

    key
}
