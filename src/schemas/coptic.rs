// This file is part of kalends.

//! The Coptic schema family: twelve 30-day months plus five epagomenal days
//! (six when `year mod 4 == 3`), shared by the Coptic and Ethiopic calendars.
//!
//! The two variants differ only in where they put the epagomenal run: the
//! 12-month variant attaches it as days 31..=36 of the last month, the
//! 13-month variant exposes it as a short virtual thirteenth month. The day
//! counting underneath is identical.

use crate::schema::{
    CalendarSchema, EpagomenalSchema, IntercalarySchema, RegularSchema, SupplementarySchema,
    VirtualMonthSchema,
};

/// Whether `year` has a sixth epagomenal day.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Zero-based day count of `(year, month, day)` from day 1 of year 1.
///
/// Valid for both variants: every month boundary below the epagomenal run
/// falls on a multiple of 30.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    365 * (y - 1) + y.div_euclid(4) + 30 * (month as i64 - 1) + day as i64 - 1
}

/// The year containing a zero-based day count.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    (4 * days + 1463).div_euclid(1461)
}

const fn days_in_epagomenal_run(year: i32) -> u8 {
    if is_leap_year(year) {
        6
    } else {
        5
    }
}

/// The Coptic year shape with the epagomenal days folded into month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Coptic12Schema;

impl CalendarSchema for Coptic12Schema {
    fn is_leap_year(year: i32) -> bool {
        is_leap_year(year)
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(year: i32) -> u16 {
        360 + days_in_epagomenal_run(year) as u16
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            12 => 30 + days_in_epagomenal_run(year),
            1..=11 => 30,
            _ => 0,
        }
    }

    fn last_month_day_in_year(year: i32) -> (u8, u8) {
        (12, 30 + days_in_epagomenal_run(year))
    }

    fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
        days_since_epoch(year, month, day)
    }

    fn year_from_days(days: i64) -> i64 {
        year_from_days(days)
    }

    fn month_day_from_ordinal(_year: i32, day_of_year: u16) -> (u8, u8) {
        let month = ((day_of_year as i64 - 1).div_euclid(30) + 1).min(12) as u8;
        (month, (day_of_year - 30 * (month as u16 - 1)) as u8)
    }
}

impl RegularSchema for Coptic12Schema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl EpagomenalSchema for Coptic12Schema {
    fn epagomenal_number(_year: i32, month: u8, day: u8) -> Option<u8> {
        (month == 12 && day > 30).then(|| day - 30)
    }
}

impl SupplementarySchema for Coptic12Schema {
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool {
        Self::is_epagomenal_day(year, month, day)
    }
}

impl IntercalarySchema for Coptic12Schema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 12 && day == 36
    }
}

/// The Coptic year shape with the epagomenal days as a virtual month 13.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Coptic13Schema;

impl CalendarSchema for Coptic13Schema {
    fn is_leap_year(year: i32) -> bool {
        is_leap_year(year)
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(year: i32) -> u16 {
        360 + days_in_epagomenal_run(year) as u16
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            13 => days_in_epagomenal_run(year),
            1..=12 => 30,
            _ => 0,
        }
    }

    fn last_month_day_in_year(year: i32) -> (u8, u8) {
        (13, days_in_epagomenal_run(year))
    }

    fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
        days_since_epoch(year, month, day)
    }

    fn year_from_days(days: i64) -> i64 {
        year_from_days(days)
    }

    fn month_day_from_ordinal(_year: i32, day_of_year: u16) -> (u8, u8) {
        let month = ((day_of_year as i64 - 1).div_euclid(30) + 1).min(13) as u8;
        (month, (day_of_year - 30 * (month as u16 - 1)) as u8)
    }
}

impl RegularSchema for Coptic13Schema {
    const MONTHS_IN_YEAR: u8 = 13;
}

impl EpagomenalSchema for Coptic13Schema {
    fn epagomenal_number(_year: i32, month: u8, day: u8) -> Option<u8> {
        (month == 13).then_some(day)
    }
}

impl VirtualMonthSchema for Coptic13Schema {
    const VIRTUAL_MONTH: u8 = 13;
}

impl SupplementarySchema for Coptic13Schema {
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool {
        Self::is_epagomenal_day(year, month, day)
    }
}

impl IntercalarySchema for Coptic13Schema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 13 && day == 6
    }
}
