// This file is part of kalends.

//! The schema abstraction: pure arithmetic mapping between the components of
//! one calendar and a linear day count.
//!
//! A schema knows nothing about epochs, supported year ranges or the global
//! day-number axis; it works entirely in "days since this calendar's own
//! epoch", zero-based at day 1 of year 1. The [`crate::Calendar`] binding
//! supplies the rest.
//!
//! Schema functions assume their component inputs have already been validated
//! by a [`crate::CalendarScope`]; they do not validate and are deterministic
//! and total (no panics) over every `i32` year, which is why day counts are
//! produced as `i64`.

use crate::helpers::{i64_to_i32, I32CastError};

/// Calendar-specific arithmetic, implemented as associated functions so that
/// a schema carries no per-call state.
pub trait CalendarSchema {
    /// Whether `year` contains an intercalation.
    fn is_leap_year(year: i32) -> bool;

    /// The number of months in `year`.
    fn months_in_year(year: i32) -> u8;

    /// The number of days in `year`.
    fn days_in_year(year: i32) -> u16;

    /// The number of days in `month` of `year`.
    fn days_in_month(year: i32, month: u8) -> u8;

    /// The month and day of the last day of `year`.
    fn last_month_day_in_year(year: i32) -> (u8, u8);

    /// The zero-based day count of `(year, month, day)` relative to the
    /// schema's day 1 of year 1. Closed-form; does not validate.
    fn days_since_epoch(year: i32, month: u8, day: u8) -> i64;

    /// The year containing the zero-based day count `days`.
    fn year_from_days(days: i64) -> i64;

    /// The day count of the first day of `year`.
    fn start_of_year(year: i32) -> i64 {
        Self::days_since_epoch(year, 1, 1)
    }

    /// The day count of the last day of `year`.
    fn end_of_year(year: i32) -> i64 {
        Self::start_of_year(year) + Self::days_in_year(year) as i64 - 1
    }

    /// The day count of the first day of `month` of `year`.
    fn start_of_month(year: i32, month: u8) -> i64 {
        Self::days_since_epoch(year, month, 1)
    }

    /// The day count of the last day of `month` of `year`.
    fn end_of_month(year: i32, month: u8) -> i64 {
        Self::start_of_month(year, month) + Self::days_in_month(year, month) as i64 - 1
    }

    /// The day count of `(year, day_of_year)`; does not validate.
    fn days_since_epoch_ordinal(year: i32, day_of_year: u16) -> i64 {
        Self::start_of_year(year) + day_of_year as i64 - 1
    }

    /// The year and one-based day of year containing `days`.
    fn ordinal_parts(days: i64) -> Result<(i32, u16), I32CastError> {
        let year = i64_to_i32(Self::year_from_days(days))?;
        let day_of_year = days - Self::start_of_year(year) + 1;
        debug_assert!(day_of_year >= 1 && day_of_year <= Self::days_in_year(year) as i64);
        Ok((year, day_of_year as u16))
    }

    /// Split a one-based day of year into month and day, by walking the month
    /// table. Schemas with a cheap closed form override this.
    ///
    /// Assumes `day_of_year` is valid for `year`.
    fn month_day_from_ordinal(year: i32, day_of_year: u16) -> (u8, u8) {
        let mut month = 1u8;
        let mut day = day_of_year as i32;
        while month < Self::months_in_year(year) {
            let len = Self::days_in_month(year, month) as i32;
            if day <= len {
                break;
            }
            day -= len;
            month += 1;
        }
        debug_assert!(day >= 1 && day <= Self::days_in_month(year, month) as i32);
        (month, day as u8)
    }

    /// Inverse of [`Self::days_since_epoch`]: the `(year, month, day)`
    /// containing `days`.
    ///
    /// For every valid triple, `date_parts(days_since_epoch(y, m, d))`
    /// round-trips to `(y, m, d)`.
    fn date_parts(days: i64) -> Result<(i32, u8, u8), I32CastError> {
        let (year, day_of_year) = Self::ordinal_parts(days)?;
        let (month, day) = Self::month_day_from_ordinal(year, day_of_year);
        Ok((year, month, day))
    }
}

/// Schemas whose month count never varies from year to year.
pub trait RegularSchema: CalendarSchema {
    /// The fixed number of months in every year.
    const MONTHS_IN_YEAR: u8;
}

/// Schemas with a leap-inserted day (February 29, the sixth epagomenal day,
/// the 30th of the last Islamic month, the World calendar's Leapyear Day).
///
/// The Egyptian family has no leap rule and deliberately does not implement
/// this trait.
pub trait IntercalarySchema: CalendarSchema {
    /// Whether `(year, month, day)` is the intercalary day. Does not
    /// validate.
    fn is_intercalary_day(year: i32, month: u8, day: u8) -> bool;
}

/// Schemas with epagomenal days: a short run of days appended after the last
/// full month, outside the regular month structure.
pub trait EpagomenalSchema: CalendarSchema {
    /// The one-based position of `(year, month, day)` within the epagomenal
    /// run, or `None` for a regular day. Does not validate.
    fn epagomenal_number(year: i32, month: u8, day: u8) -> Option<u8>;

    /// Whether `(year, month, day)` is an epagomenal day.
    fn is_epagomenal_day(year: i32, month: u8, day: u8) -> bool {
        Self::epagomenal_number(year, month, day).is_some()
    }
}

/// Epagomenal schemas that expose the epagomenal run as a short virtual
/// month rather than as trailing days of the last full month.
pub trait VirtualMonthSchema: EpagomenalSchema {
    /// The index of the virtual month.
    const VIRTUAL_MONTH: u8;
}

/// Schemas with blank days: days excluded from the weekday cycle to keep
/// weeks aligned across months (the World calendar).
pub trait BlankDaySchema: CalendarSchema {
    /// Whether `(year, month, day)` is a blank day. Does not validate.
    fn is_blank_day(year: i32, month: u8, day: u8) -> bool;
}

/// Schemas with days that sit outside the regular month structure: an
/// epagomenal run, or the World calendar's blank days.
pub trait SupplementarySchema: CalendarSchema {
    /// Whether `(year, month, day)` is such a day. Does not validate.
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool;
}
