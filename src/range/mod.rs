//! Bounded-range sampling
//!
//! Stateless algorithms that turn raw words from any [`RngCore`] into
//! values inside a requested range:
//!
//! - `u32` / `i32`: power-of-two masking, otherwise rejection sampling
//! - `u64` / `i64`: Canon's widening-multiply method
//! - `f64`: 53-bit fractions scaled into the range
//!
//! The free functions in [`int`] and [`float`] are the building blocks.
//! [`UniformRange`] exposes them as methods on every generator, and
//! [`UniformRange::gen_range`] accepts standard `a..b` and `a..=b` ranges.

use std::ops::{Range, RangeInclusive};

use rand_core::RngCore;

mod error;
pub mod float;
pub mod int;

pub use error::RangeError;

/// A range that values of type `T` can be sampled from.
pub trait SampleRange<T> {
    /// Draws one value from the range.
    fn sample<R: RngCore + ?Sized>(self, rng: &mut R) -> Result<T, RangeError>;
}

macro_rules! impl_sample_range {
    ($ty:ty, $exclusive:path, $inclusive:path) => {
        impl SampleRange<$ty> for Range<$ty> {
            fn sample<R: RngCore + ?Sized>(self, rng: &mut R) -> Result<$ty, RangeError> {
                $exclusive(rng, self.start, self.end)
            }
        }

        impl SampleRange<$ty> for RangeInclusive<$ty> {
            fn sample<R: RngCore + ?Sized>(self, rng: &mut R) -> Result<$ty, RangeError> {
                let (low, high) = self.into_inner();
                $inclusive(rng, low, high)
            }
        }
    };
}

impl_sample_range!(u32, int::sample_u32, int::sample_u32_inclusive);
impl_sample_range!(i32, int::sample_i32, int::sample_i32_inclusive);
impl_sample_range!(u64, int::sample_u64, int::sample_u64_inclusive);
impl_sample_range!(i64, int::sample_i64, int::sample_i64_inclusive);

impl SampleRange<f64> for Range<f64> {
    fn sample<R: RngCore + ?Sized>(self, rng: &mut R) -> Result<f64, RangeError> {
        float::sample_f64(rng, self.start, self.end)
    }
}

/// Range sampling methods for every [`RngCore`].
///
/// All methods validate their bounds before drawing any word.
pub trait UniformRange: RngCore {
    /// Samples from a `low..high` or `low..=high` range.
    fn gen_range<T, S: SampleRange<T>>(&mut self, range: S) -> Result<T, RangeError> {
        range.sample(self)
    }

    /// Uniform `u32` in `[low, high)`.
    fn gen_range_u32(&mut self, low: u32, high: u32) -> Result<u32, RangeError> {
        int::sample_u32(self, low, high)
    }

    /// Uniform `i32` in `[low, high)`.
    fn gen_range_i32(&mut self, low: i32, high: i32) -> Result<i32, RangeError> {
        int::sample_i32(self, low, high)
    }

    /// `u64` in `[low, high)` using Canon's method.
    fn gen_range_u64(&mut self, low: u64, high: u64) -> Result<u64, RangeError> {
        int::sample_u64(self, low, high)
    }

    /// `i64` in `[low, high)` using Canon's method.
    fn gen_range_i64(&mut self, low: i64, high: i64) -> Result<i64, RangeError> {
        int::sample_i64(self, low, high)
    }

    /// `f64` in `[low, high)`.
    fn gen_range_f64(&mut self, low: f64, high: f64) -> Result<f64, RangeError> {
        float::sample_f64(self, low, high)
    }

    /// `f64` in `[0, 1)`.
    fn gen_unit_f64(&mut self) -> f64 {
        float::sample_unit_f64(self)
    }
}

impl<R: RngCore + ?Sized> UniformRange for R {}
