// This file is part of kalends.
//
// Internal integer helpers shared by the schema implementations.

/// A day count produced a year that cannot be represented as an `i32`.
///
/// Schema arithmetic is carried out in `i64` so that it is total over every
/// `i32` input; this error marks the narrowing step back to `i32`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)] // the two sides of an interval; will not grow
pub enum I32CastError {
    /// The value was below `i32::MIN`.
    BelowMin,
    /// The value was above `i32::MAX`.
    AboveMax,
}

pub(crate) const fn i64_to_i32(value: i64) -> Result<i32, I32CastError> {
    if value < i32::MIN as i64 {
        Err(I32CastError::BelowMin)
    } else if value > i32::MAX as i64 {
        Err(I32CastError::AboveMax)
    } else {
        Ok(value as i32)
    }
}
