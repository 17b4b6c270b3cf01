// This file is part of kalends.

//! The proleptic Julian calendar.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{julian, JulianSchema};
use crate::scope::CalendarScope;
use crate::DayNumber;

/// The Julian calendar, applied prolepticly over its whole year range.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Julian;

impl Calendar for Julian {
    type Schema = JulianSchema;
    const EPOCH: DayNumber = epoch::JULIAN;
    const SCOPE: CalendarScope = CalendarScope::proleptic(
        julian::days_since_epoch(-999_998, 1, 1),
        julian::days_since_epoch(1_000_000, 1, 1) - 1,
    );

    fn debug_name() -> &'static str {
        "Julian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Date};

    #[test]
    fn epoch_is_two_days_before_gregorian() {
        let date = Date::<Julian>::try_new(1, 1, 1).unwrap();
        assert_eq!(date.day_number(), DayNumber::new(-2));
    }

    #[test]
    fn calendar_reform_gap() {
        // The day the Gregorian reform skipped to: Julian 1582-10-05 and
        // Gregorian 1582-10-15 name the same day.
        let julian = Date::<Julian>::try_new(1582, 10, 5).unwrap();
        let gregorian = julian.to_calendar::<Civil>().unwrap();
        assert_eq!(gregorian.year_month_day(), (1582, 10, 15));
    }

    #[test]
    fn century_years_are_leap() {
        let date = Date::<Julian>::try_new(1900, 2, 29).unwrap();
        assert!(date.is_in_leap_year());
        assert_eq!(date.days_in_year(), 366);
    }
}
