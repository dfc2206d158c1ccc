//! Errors reported by the range samplers.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors returned by the range samplers.
///
/// Arguments are validated before any word is drawn, so a failed call
/// leaves the generator untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The range contains no values (`low >= high`, or `low > high` for
    /// inclusive ranges).
    EmptyRange,

    /// A floating-point bound is infinite or NaN.
    NonFinite,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RangeError::EmptyRange => f.write_str("range is empty"),
            RangeError::NonFinite => f.write_str("range bounds must be finite"),
        }
    }
}

impl std::error::Error for RangeError {}
