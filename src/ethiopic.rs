// This file is part of kalends.

//! The Ethiopic calendar (Incarnation era): the Coptic year shape anchored
//! 276 years earlier.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{coptic, Coptic12Schema, Coptic13Schema};
use crate::scope::CalendarScope;
use crate::DayNumber;

const SCOPE: CalendarScope = CalendarScope::standard(
    coptic::days_since_epoch(1, 1, 1),
    coptic::days_since_epoch(10_000, 1, 1) - 1,
);

/// The Ethiopic calendar with the epagomenal days counted as the tail of
/// month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Ethiopic;

impl Calendar for Ethiopic {
    type Schema = Coptic12Schema;
    const EPOCH: DayNumber = epoch::ETHIOPIC;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Ethiopic"
    }
}

/// The Ethiopic calendar with the epagomenal days as a thirteenth month.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Ethiopic13;

impl Calendar for Ethiopic13 {
    type Schema = Coptic13Schema;
    const EPOCH: DayNumber = epoch::ETHIOPIC;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Ethiopic13"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Civil, Coptic, Date};

    #[test]
    fn golden_conversion() {
        let ethiopic = Date::<Ethiopic>::try_new(1962, 4, 24).unwrap();
        let iso = ethiopic.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (1970, 1, 2));
    }

    #[test]
    fn runs_276_years_behind_coptic() {
        let ethiopic = Date::<Ethiopic>::try_new(1962, 4, 24).unwrap();
        let coptic = ethiopic.to_calendar::<Coptic>().unwrap();
        assert_eq!(coptic.year_month_day(), (1686, 4, 24));
    }

    #[test]
    fn new_year_day() {
        // Ethiopic 2016-01-01 is Gregorian 2023-09-12.
        let ethiopic = Date::<Ethiopic>::try_new(2016, 1, 1).unwrap();
        let iso = ethiopic.to_calendar::<Civil>().unwrap();
        assert_eq!(iso.year_month_day(), (2023, 9, 12));
    }
}
