// This file is part of kalends.

//! The World calendar: the perennial reform proposal of equal quarters and
//! blank days, anchored one day before the Gregorian epoch so that its first
//! year opens on a Sunday.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{world, WorldSchema};
use crate::scope::CalendarScope;
use crate::DayNumber;

/// The World calendar over the standard year range.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct World;

impl Calendar for World {
    type Schema = WorldSchema;
    const EPOCH: DayNumber = epoch::SUNDAY_BEFORE_GREGORIAN;
    const SCOPE: CalendarScope = CalendarScope::standard(
        world::days_since_epoch(1, 1, 1),
        world::days_since_epoch(10_000, 1, 1) - 1,
    );

    fn debug_name() -> &'static str {
        "World"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Date, Weekday};

    #[test]
    fn first_day_is_a_sunday() {
        let date = Date::<World>::try_new(1, 1, 1).unwrap();
        assert_eq!(date.day_number(), DayNumber::new(-1));
        assert_eq!(date.day_of_week(), Weekday::Sunday);
    }

    #[test]
    fn runs_one_day_behind_gregorian() {
        let world = Date::<World>::try_new(2000, 1, 1).unwrap();
        let iso = world.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (1999, 12, 31));
    }

    #[test]
    fn worldsday_and_leapyear_day() {
        let worldsday = Date::<World>::try_new(2023, 12, 31).unwrap();
        assert!(worldsday.is_blank_day());
        assert!(!worldsday.is_intercalary_day());
        assert_eq!(worldsday, worldsday.end_of_year());

        let leapyear_day = Date::<World>::try_new(2024, 6, 31).unwrap();
        assert!(leapyear_day.is_blank_day());
        assert!(leapyear_day.is_intercalary_day());
        assert_eq!(leapyear_day, leapyear_day.end_of_month());
        assert!(Date::<World>::try_new(2023, 6, 31).is_err());
    }

    #[test]
    fn quarters_share_a_shape() {
        let date = Date::<World>::try_new(2023, 1, 1).unwrap();
        for month in [1u8, 4, 7, 10] {
            assert_eq!(date.with_month(month).unwrap().days_in_month(), 31);
        }
        for month in [2u8, 3, 5, 8, 9, 11] {
            assert_eq!(date.with_month(month).unwrap().days_in_month(), 30);
        }
    }
}
