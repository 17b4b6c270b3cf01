// This file is part of kalends.

//! The Coptic calendar (Era of Diocletian), in its 12-month and 13-month
//! presentations.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{coptic, Coptic12Schema, Coptic13Schema};
use crate::scope::CalendarScope;
use crate::DayNumber;

const SCOPE: CalendarScope = CalendarScope::standard(
    coptic::days_since_epoch(1, 1, 1),
    coptic::days_since_epoch(10_000, 1, 1) - 1,
);

/// The Coptic calendar with the epagomenal days counted as the tail of
/// month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Coptic;

impl Calendar for Coptic {
    type Schema = Coptic12Schema;
    const EPOCH: DayNumber = epoch::COPTIC;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Coptic"
    }
}

/// The Coptic calendar with the epagomenal days as a thirteenth month.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Coptic13;

impl Calendar for Coptic13 {
    type Schema = Coptic13Schema;
    const EPOCH: DayNumber = epoch::COPTIC;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Coptic13"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Date};

    #[test]
    fn golden_conversion() {
        let coptic = Date::<Coptic>::try_new(1686, 4, 24).unwrap();
        assert_eq!(coptic.day_number(), DayNumber::new(719_163));
        let iso = coptic.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (1970, 1, 2));
    }

    #[test]
    fn variants_name_the_same_days() {
        let twelve = Date::<Coptic>::try_new(1687, 12, 36).unwrap();
        let thirteen = twelve.to_calendar::<Coptic13>().unwrap();
        assert_eq!(thirteen.year_month_day(), (1687, 13, 6));
        assert!(twelve.is_intercalary_day());
        assert!(thirteen.is_intercalary_day());
        assert_eq!(twelve.epagomenal_number(), Some(6));
        assert_eq!(thirteen.epagomenal_number(), Some(6));
    }

    #[test]
    fn virtual_month() {
        let date = Date::<Coptic13>::try_new(1686, 13, 1).unwrap();
        assert_eq!(date.virtual_month(), 13);
        assert_eq!(date.months_in_year(), 13);
    }
}
