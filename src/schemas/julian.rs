// This file is part of kalends.

//! The Julian schema: 12 Gregorian-shaped months with the plain
//! every-four-years leap rule.

use crate::schema::{CalendarSchema, IntercalarySchema, RegularSchema};

/// Whether `year` is a Julian leap year.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

const fn days_before_month(year: i32, month: u8) -> i64 {
    let days = match month {
        1 => 0,
        2 => 31,
        3 => 59,
        4 => 90,
        5 => 120,
        6 => 151,
        7 => 181,
        8 => 212,
        9 => 243,
        10 => 273,
        11 => 304,
        12 => 334,
        _ => 0,
    };
    // Leap days are added to the end of February.
    if month > 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Zero-based day count of `(year, month, day)` from Julian 0001-01-01.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let prev_year = year as i64 - 1;
    365 * prev_year + prev_year.div_euclid(4) + days_before_month(year, month) + day as i64 - 1
}

/// The Julian year containing a zero-based day count.
///
/// Year starts sit at `floor(1461 * (year - 1) / 4)`, which inverts exactly.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    (4 * days + 3).div_euclid(1461) + 1
}

/// The Julian month-length and leap rules as a [`CalendarSchema`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct JulianSchema;

impl CalendarSchema for JulianSchema {
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
}

impl RegularSchema for JulianSchema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl IntercalarySchema for JulianSchema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 2 && day == 29
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::assert_schema_laws;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since_epoch(1, 1, 1), 0);
        assert_eq!(year_from_days(0), 1);
    }

    #[test]
    fn four_year_cycle() {
        assert_eq!(days_since_epoch(5, 1, 1) - days_since_epoch(1, 1, 1), 1461);
        assert_eq!(days_since_epoch(-3, 1, 1) - days_since_epoch(-7, 1, 1), 1461);
    }

    #[test]
    fn centuries_are_leap_years() {
        assert!(is_leap_year(1900));
        assert!(is_leap_year(100));
        assert!(!is_leap_year(1901));
    }

    #[test]
    fn schema_laws() {
        assert_schema_laws::<JulianSchema>(-5..=5);
        assert_schema_laws::<JulianSchema>(550..=554);
        assert_schema_laws::<JulianSchema>(1899..=1901);
    }
}
