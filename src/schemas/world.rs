// This file is part of kalends.

//! The World calendar schema: a perennial reform calendar of four identical
//! 91-day quarters (31 + 30 + 30), padded to the solar year by two blank
//! days that belong to no week. Worldsday follows December 30 every year
//! (counted here as December 31), and Leapyear Day follows June 30 (June 31)
//! in Gregorian-rule leap years.

use crate::schema::{
    BlankDaySchema, CalendarSchema, IntercalarySchema, RegularSchema, SupplementarySchema,
};
use crate::schemas::gregorian;

/// Whether `year` contains Leapyear Day; the Gregorian rule, applied to the
/// same year number.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    gregorian::is_leap_year(year)
}

const fn days_before_month(year: i32, month: u8) -> i64 {
    let m = month as i64 - 1;
    let days = 91 * m.div_euclid(3) + match m.rem_euclid(3) {
        0 => 0,
        1 => 31,
        _ => 61,
    };
    // Leapyear Day sits at the end of the second quarter.
    if month > 6 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Zero-based day count of `(year, month, day)` from day 1 of year 1.
///
/// World years start on the same day counts as Gregorian years: both insert
/// the same number of leap days before any given year.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let prev_year = year as i64 - 1;
    365 * prev_year + prev_year.div_euclid(4) - prev_year.div_euclid(100)
        + prev_year.div_euclid(400)
        + days_before_month(year, month)
        + day as i64
        - 1
}

/// The year containing a zero-based day count.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    gregorian::year_from_days(days)
}

/// The World calendar rules as a [`CalendarSchema`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct WorldSchema;

impl CalendarSchema for WorldSchema {
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
            12 => 31,
            6 if is_leap_year(year) => 31,
            m if m % 3 == 1 && m <= 12 => 31,
            1..=12 => 30,
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
}

impl RegularSchema for WorldSchema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl BlankDaySchema for WorldSchema {
    fn is_blank_day(_year: i32, month: u8, day: u8) -> bool {
        day == 31 && (month == 6 || month == 12)
    }
}

impl SupplementarySchema for WorldSchema {
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool {
        Self::is_blank_day(year, month, day)
    }
}

impl IntercalarySchema for WorldSchema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 6 && day == 31
    }
}
