// This file is part of kalends.

//! The Gregorian calendar, in two supported ranges: [`Civil`] for the
//! conventional years 1 through 9999, and [`Gregorian`] extended prolepticly
//! over the whole comfortable day-count range.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{gregorian, GregorianSchema};
use crate::scope::CalendarScope;
use crate::DayNumber;

/// The Gregorian calendar over the standard year range `1..=9999`.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Civil;

impl Calendar for Civil {
    type Schema = GregorianSchema;
    const EPOCH: DayNumber = epoch::GREGORIAN;
    const SCOPE: CalendarScope = CalendarScope::standard(
        gregorian::days_since_epoch(1, 1, 1),
        gregorian::days_since_epoch(10_000, 1, 1) - 1,
    );

    fn debug_name() -> &'static str {
        "Civil"
    }
}

/// The proleptic Gregorian calendar: the same rules applied uniformly to
/// years far before the calendar existed and far after year 9999.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Gregorian;

impl Calendar for Gregorian {
    type Schema = GregorianSchema;
    const EPOCH: DayNumber = epoch::GREGORIAN;
    const SCOPE: CalendarScope = CalendarScope::proleptic(
        gregorian::days_since_epoch(-999_998, 1, 1),
        gregorian::days_since_epoch(1_000_000, 1, 1) - 1,
    );

    fn debug_name() -> &'static str {
        "Gregorian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Date, DateError, Weekday};

    #[test]
    fn unix_epoch_day_number() {
        let date = Date::<Civil>::try_new(1970, 1, 1).unwrap();
        assert_eq!(date.day_number(), DayNumber::new(719_162));
        assert_eq!(date.day_of_week(), Weekday::Thursday);
    }

    #[test]
    fn civil_rejects_year_10000() {
        assert_eq!(
            Date::<Civil>::try_new(10_000, 1, 1),
            Err(DateError::OutOfRange {
                field: "year",
                value: 10_000,
                min: 1,
                max: 9999,
            })
        );
    }

    #[test]
    fn civil_bounds() {
        assert_eq!(Date::<Civil>::MIN.year_month_day(), (1, 1, 1));
        assert_eq!(Date::<Civil>::MAX.year_month_day(), (9999, 12, 31));
    }

    #[test]
    fn proleptic_reaches_year_zero() {
        // Year 0 is divisible by 400, hence leap.
        let date = Date::<Gregorian>::try_new(0, 2, 29).unwrap();
        assert_eq!(date.year_month_day(), (0, 2, 29));
        assert!(date.is_in_leap_year());
        assert!(Date::<Gregorian>::try_new(-999_998, 1, 1).is_ok());
        assert!(Date::<Gregorian>::try_new(999_999, 12, 31).is_ok());
    }

    #[test]
    fn civil_and_proleptic_agree_where_both_exist() {
        let civil = Date::<Civil>::try_new(2000, 1, 1).unwrap();
        let wide = civil.to_calendar::<Gregorian>().unwrap();
        assert_eq!(wide.year_month_day(), (2000, 1, 1));
        assert_eq!(civil.day_number(), wide.day_number());
    }
}
