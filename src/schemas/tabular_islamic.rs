// This file is part of kalends.

//! The Tabular Islamic schema: the arithmetic approximation of the lunar
//! Hijri calendar. Months alternate 30 and 29 days; eleven years out of every
//! thirty gain a 30th day on the last month, for a 10631-day cycle.

use crate::schema::{CalendarSchema, IntercalarySchema, RegularSchema};

/// Whether `year` is one of the eleven leap years of the 30-year cycle.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

const fn days_before_month(month: u8) -> i64 {
    29 * (month as i64 - 1) + (month as i64).div_euclid(2)
}

/// Zero-based day count of `(year, month, day)` from day 1 of year 1.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    354 * (y - 1) + (3 + 11 * y).div_euclid(30) + days_before_month(month) + day as i64 - 1
}

/// The year containing a zero-based day count.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    (30 * days + 10_646).div_euclid(10_631)
}

/// The Tabular Islamic month-length and leap rules as a [`CalendarSchema`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct TabularIslamicSchema;

impl CalendarSchema for TabularIslamicSchema {
    fn is_leap_year(year: i32) -> bool {
        is_leap_year(year)
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(year: i32) -> u16 {
        if is_leap_year(year) {
            355
        } else {
            354
        }
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            12 if is_leap_year(year) => 30,
            m if m % 2 == 1 && m <= 12 => 30,
            1..=12 => 29,
            _ => 0,
        }
    }

    fn last_month_day_in_year(year: i32) -> (u8, u8) {
        (12, if is_leap_year(year) { 30 } else { 29 })
    }

    fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
        days_since_epoch(year, month, day)
    }

    fn year_from_days(days: i64) -> i64 {
        year_from_days(days)
    }

    fn month_day_from_ordinal(_year: i32, day_of_year: u16) -> (u8, u8) {
        let month = ((2 * (day_of_year as i64 - 1)).div_euclid(59) + 1).min(12) as u8;
        (month, (day_of_year as i64 - days_before_month(month)) as u8)
    }
}

impl RegularSchema for TabularIslamicSchema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl IntercalarySchema for TabularIslamicSchema {
    fn is_intercalary_day(_year: i32, month: u8, day: u8) -> bool {
        month == 12 && day == 30
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
    fn eleven_leap_years_per_cycle() {
        let leaps = (1..=30).filter(|&y| is_leap_year(y)).collect::<Vec<_>>();
        assert_eq!(leaps, [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
    }

    #[test]
    fn thirty_year_cycle_has_10631_days() {
        let total: i64 = (1..=30)
            .map(|y| TabularIslamicSchema::days_in_year(y) as i64)
            .sum();
        assert_eq!(total, 10_631);
        assert_eq!(days_since_epoch(31, 1, 1), 10_631);
    }

    #[test]
    fn month_lengths_alternate() {
        assert_eq!(TabularIslamicSchema::days_in_month(1, 1), 30);
        assert_eq!(TabularIslamicSchema::days_in_month(1, 2), 29);
        assert_eq!(TabularIslamicSchema::days_in_month(1, 11), 30);
        // Year 1 is common, year 2 is leap.
        assert_eq!(TabularIslamicSchema::days_in_month(1, 12), 29);
        assert_eq!(TabularIslamicSchema::days_in_month(2, 12), 30);
    }

    #[test]
    fn schema_laws() {
        assert_schema_laws::<TabularIslamicSchema>(-3..=3);
        assert_schema_laws::<TabularIslamicSchema>(1..=31);
        assert_schema_laws::<TabularIslamicSchema>(1444..=1446);
    }
}
