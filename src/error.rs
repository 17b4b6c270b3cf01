// This file is part of kalends.

use displaydoc::Display;

#[cfg(feature = "std")]
impl std::error::Error for DateError {}

/// A list of error outcomes for the operations in this crate.
///
/// The kinds are deliberately distinct: a rejected component, an integer
/// overflow, and an arithmetically sound result that left the calendar's
/// supported domain are different situations and callers may want to handle
/// them differently.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// {field} must be in the range {min}..={max}, got {value}
    OutOfRange {
        /// The name of the rejected component.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// The smallest accepted value.
        min: i64,
        /// The largest accepted value.
        max: i64,
    },
    /// day arithmetic overflowed the integer day-count range
    ArithmeticOverflow,
    /// the result falls outside the supported domain of the calendar
    DomainOverflow,
    /// invalid calendar configuration: {reason}
    InvalidConfiguration {
        /// What is inconsistent about the configuration.
        reason: &'static str,
    },
}

impl DateError {
    pub(crate) const fn out_of_range(
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> Self {
        DateError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}
