// This file is part of kalends.

//! The Gregorian schema: the familiar 12-month year with the 4/100/400 leap
//! rule, shared by the Civil and proleptic Gregorian calendars.

use crate::helpers::{i64_to_i32, I32CastError};
use crate::schema::{CalendarSchema, IntercalarySchema, RegularSchema};

/// Whether `year` is a Gregorian leap year.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 400 == 0 || year % 100 != 0)
}

/// Zero-based day count of `(year, month, day)` from Gregorian 0001-01-01.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let prev_year = year as i64 - 1;
    let mut days = 365 * prev_year + prev_year.div_euclid(4) - prev_year.div_euclid(100)
        + prev_year.div_euclid(400);
    days += (367 * month as i64 - 362).div_euclid(12);
    if month > 2 {
        days -= if is_leap_year(year) { 1 } else { 2 };
    }
    days + day as i64 - 1
}

/// The Gregorian year containing a zero-based day count.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    // 400-year cycles have 146097 days
    let (n_400, days) = (days.div_euclid(146_097), days.rem_euclid(146_097));

    // 100-year cycles have 36524 days
    let (n_100, days) = (days.div_euclid(36_524), days.rem_euclid(36_524));

    // 4-year cycles have 1461 days
    let (n_4, days) = (days.div_euclid(1461), days.rem_euclid(1461));

    let n_1 = days.div_euclid(365);

    let year = 400 * n_400 + 100 * n_100 + 4 * n_4 + n_1;

    if n_100 == 4 || n_1 == 4 {
        year
    } else {
        year + 1
    }
}

/// Closed-form inverse of [`days_since_epoch`].
pub(crate) fn date_parts(days: i64) -> Result<(i32, u8, u8), I32CastError> {
    let year = i64_to_i32(year_from_days(days))?;
    let prior_days = days - days_since_epoch(year, 1, 1);
    let correction = if days < days_since_epoch(year, 3, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8; // in 1..=12
    let day = (days - days_since_epoch(year, month, 1) + 1) as u8; // <= days_in_month
    Ok((year, month, day))
}

/// The Gregorian month-length and leap rules as a [`CalendarSchema`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct GregorianSchema;

impl CalendarSchema for GregorianSchema {
    fn is_leap_year(year: i32) -> bool {
        is_leap_year(year)
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(year: i32) -> u16 {
        if is_leap_year(year) {
            366
        } else {
            365
        }
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(year) => 29,
            2 => 28,
            1..=12 => 31,
            _ => 0,
        }
    }

    fn last_month_day_in_year(_year: i32) -> (u8, u8) {
        (12, 31)
    }

    fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
        days_since_epoch(year, month, day)
    }

    fn year_from_days(days: i64) -> i64 {
        year_from_days(days)
    }

    fn date_parts(days: i64) -> Result<(i32, u8, u8), I32CastError> {
        date_parts(days)
    }
}

impl RegularSchema for GregorianSchema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl IntercalarySchema for GregorianSchema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 2 && day == 29
    }
}
