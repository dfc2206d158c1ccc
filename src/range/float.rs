//! Bounded floating-point sampling.

use rand_core::RngCore;

use super::error::RangeError;

/// 2⁻⁵³, the spacing of 53-bit fractions in `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Samples from `[0, 1)` using the top 53 bits of one 64-bit word.
#[inline]
pub fn sample_unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// Samples from `[low, high)` using exactly one 64-bit word.
///
/// A unit value `v` is mapped to `low + v * (high - low)`. If the width
/// overflows, `low * (1 - v) + high * v` is used instead. A result that
/// rounds up to `high` is pulled back to the largest float below it.
///
/// # Errors
/// - [`RangeError::NonFinite`] if either bound is infinite or NaN
/// - [`RangeError::EmptyRange`] if `low >= high`
pub fn sample_f64<R: RngCore + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<f64, RangeError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(RangeError::NonFinite);
    }

    if low >= high {
        return Err(RangeError::EmptyRange);
    }

    let unit = sample_unit_f64(rng);
    let scale = high - low;

    let value = if scale.is_finite() {
        low + unit * scale
    } else {
        low * (1.0 - unit) + high * unit
    };

    if value >= high {
        return Ok(below(high).max(low));
    }

    Ok(value.max(low))
}

/// Largest finite `f64` strictly below a finite `x`.
fn below(x: f64) -> f64 {
    if x == 0.0 {
        return -f64::from_bits(1);
    }

    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits + 1)
    }
}

