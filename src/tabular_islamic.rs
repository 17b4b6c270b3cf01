// This file is part of kalends.

//! The Tabular Islamic calendar, anchored to the traditional Friday epoch.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{tabular_islamic, TabularIslamicSchema};
use crate::scope::CalendarScope;
use crate::DayNumber;

/// The arithmetic Hijri calendar over the standard year range.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct TabularIslamic;

impl Calendar for TabularIslamic {
    type Schema = TabularIslamicSchema;
    const EPOCH: DayNumber = epoch::TABULAR_ISLAMIC;
    const SCOPE: CalendarScope = CalendarScope::standard(
        tabular_islamic::days_since_epoch(1, 1, 1),
        tabular_islamic::days_since_epoch(10_000, 1, 1) - 1,
    );

    fn debug_name() -> &'static str {
        "TabularIslamic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Date, Weekday};

    #[test]
    fn epoch_anchor() {
        let date = Date::<TabularIslamic>::try_new(1, 1, 1).unwrap();
        assert_eq!(date.day_of_week(), Weekday::Friday);
        let iso = date.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (622, 7, 19));
    }

    #[test]
    fn golden_conversion() {
        // 1 Muharram 1444 fell on 2022-07-30.
        let hijri = Date::<TabularIslamic>::try_new(1444, 1, 1).unwrap();
        let iso = hijri.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (2022, 7, 30));
    }

    #[test]
    fn leap_day_is_intercalary() {
        let date = Date::<TabularIslamic>::try_new(1445, 12, 30).unwrap();
        assert!(date.is_intercalary_day());
        assert!(date.is_in_leap_year());
        assert_eq!(date, date.end_of_year());
    }
}
