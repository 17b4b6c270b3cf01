// This file is part of kalends.

//! The Egyptian schema family: an invariable 365-day year of twelve 30-day
//! months plus five epagomenal days, with no leap rule at all. Shared by the
//! Armenian and Zoroastrian calendars.
//!
//! As with the Coptic family, the 12-month variant folds the epagomenal run
//! into the last month and the 13-month variant exposes it as a virtual
//! month; the day counting is the same.

use crate::schema::{
    CalendarSchema, EpagomenalSchema, RegularSchema, SupplementarySchema, VirtualMonthSchema,
};

/// Zero-based day count of `(year, month, day)` from day 1 of year 1.
pub(crate) const fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    365 * (year as i64 - 1) + 30 * (month as i64 - 1) + day as i64 - 1
}

/// The year containing a zero-based day count.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    days.div_euclid(365) + 1
}

/// The Egyptian year shape with the epagomenal days folded into month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Egyptian12Schema;

impl CalendarSchema for Egyptian12Schema {
    fn is_leap_year(_year: i32) -> bool {
        false
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(_year: i32) -> u16 {
        365
    }

    fn days_in_month(_year: i32, month: u8) -> u8 {
        match month {
            12 => 35,
            1..=11 => 30,
            _ => 0,
        }
    }

    fn last_month_day_in_year(_year: i32) -> (u8, u8) {
        (12, 35)
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

impl RegularSchema for Egyptian12Schema {
    const MONTHS_IN_YEAR: u8 = 12;
}

impl EpagomenalSchema for Egyptian12Schema {
    fn epagomenal_number(_year: i32, month: u8, day: u8) -> Option<u8> {
        (month == 12 && day > 30).then(|| day - 30)
    }
}

impl SupplementarySchema for Egyptian12Schema {
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool {
        Self::is_epagomenal_day(year, month, day)
    }
}

/// The Egyptian year shape with the epagomenal days as a virtual month 13.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Egyptian13Schema;

impl CalendarSchema for Egyptian13Schema {
    fn is_leap_year(_year: i32) -> bool {
        false
    }

    fn months_in_year(_year: i32) -> u8 {
        Self::MONTHS_IN_YEAR
    }

    fn days_in_year(_year: i32) -> u16 {
        365
    }

    fn days_in_month(_year: i32, month: u8) -> u8 {
        match month {
            13 => 5,
            1..=12 => 30,
            _ => 0,
        }
    }

    fn last_month_day_in_year(_year: i32) -> (u8, u8) {
        (13, 5)
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

impl RegularSchema for Egyptian13Schema {
    const MONTHS_IN_YEAR: u8 = 13;
}

impl EpagomenalSchema for Egyptian13Schema {
    fn epagomenal_number(_year: i32, month: u8, day: u8) -> Option<u8> {
        (month == 13).then_some(day)
    }
}

impl VirtualMonthSchema for Egyptian13Schema {
    const VIRTUAL_MONTH: u8 = 13;
}

impl SupplementarySchema for Egyptian13Schema {
    fn is_supplementary_day(year: i32, month: u8, day: u8) -> bool {
        Self::is_epagomenal_day(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::assert_schema_laws;

    #[test]
    fn every_year_is_365_days() {
        for year in [-3, 1, 100, 1419] {
            assert_eq!(Egyptian12Schema::days_in_year(year), 365);
            assert_eq!(days_since_epoch(year + 1, 1, 1) - days_since_epoch(year, 1, 1), 365);
        }
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since_epoch(1, 1, 1), 0);
        assert_eq!(year_from_days(0), 1);
        assert_eq!(year_from_days(-1), 0);
    }

    #[test]
    fn variants_agree_on_day_counts() {
        assert_eq!(
            Egyptian12Schema::days_since_epoch(1419, 12, 31),
            Egyptian13Schema::days_since_epoch(1419, 13, 1)
        );
    }

    #[test]
    fn schema_laws() {
        assert_schema_laws::<Egyptian12Schema>(-3..=3);
        assert_schema_laws::<Egyptian12Schema>(1418..=1420);
        assert_schema_laws::<Egyptian13Schema>(-3..=3);
        assert_schema_laws::<Egyptian13Schema>(1418..=1420);
    }
}
