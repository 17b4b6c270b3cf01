// This file is part of kalends.

//! The Armenian calendar: the invariable Egyptian year shape anchored to
//! Julian 552-07-11.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{egyptian, Egyptian12Schema, Egyptian13Schema};
use crate::scope::CalendarScope;
use crate::DayNumber;

const SCOPE: CalendarScope = CalendarScope::standard(
    egyptian::days_since_epoch(1, 1, 1),
    egyptian::days_since_epoch(10_000, 1, 1) - 1,
);

/// The Armenian calendar with the epagomenal days counted as the tail of
/// month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Armenian;

impl Calendar for Armenian {
    type Schema = Egyptian12Schema;
    const EPOCH: DayNumber = epoch::ARMENIAN;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Armenian"
    }
}

/// The Armenian calendar with the epagomenal days as a thirteenth month.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Armenian13;

impl Calendar for Armenian13 {
    type Schema = Egyptian13Schema;
    const EPOCH: DayNumber = epoch::ARMENIAN;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Armenian13"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Date, Julian};

    #[test]
    fn epoch_anchor() {
        let date = Date::<Armenian>::try_new(1, 1, 1).unwrap();
        let julian = date.to_calendar::<Julian>().unwrap();
        assert_eq!(julian.year_month_day(), (552, 7, 11));
    }

    #[test]
    fn golden_conversion() {
        let armenian = Date::<Armenian>::try_new(1449, 6, 8).unwrap();
        let iso = armenian.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (2000, 1, 1));
    }

    #[test]
    fn no_leap_years_ever() {
        let date = Date::<Armenian>::try_new(1448, 1, 1).unwrap();
        assert!(!date.is_in_leap_year());
        assert_eq!(date.days_in_year(), 365);
        // Year starts slip one day against the Julian calendar every
        // four years.
        let next = date.with_year(1452).unwrap();
        assert_eq!(next.days_since(date), 4 * 365);
    }

    #[test]
    fn variants_name_the_same_days() {
        let twelve = Date::<Armenian>::try_new(1449, 12, 33).unwrap();
        let thirteen = twelve.to_calendar::<Armenian13>().unwrap();
        assert_eq!(thirteen.year_month_day(), (1449, 13, 3));
        assert_eq!(twelve.epagomenal_number(), Some(3));
        assert_eq!(thirteen.epagomenal_number(), Some(3));
    }
}
