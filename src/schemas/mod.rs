// This file is part of kalends.

//! Concrete schema implementations.
//!
//! Each module holds the algorithmic core of one calendar family as free
//! `const fn`s (so calendar scopes can be computed at compile time), wrapped
//! by zero-sized types implementing [`crate::CalendarSchema`] and whichever
//! capability traits apply.
//!
//! The closed-form conversions are adapted from *Calendrical Calculations*
//! by Reingold & Dershowitz, Cambridge University Press, 4th edition (2018),
//! re-anchored to zero-based day counts from each calendar's own epoch.

pub mod coptic;
pub mod egyptian;
pub mod gregorian;
pub mod julian;
pub mod tabular_islamic;
pub mod world;

pub use coptic::{Coptic12Schema, Coptic13Schema};
pub use egyptian::{Egyptian12Schema, Egyptian13Schema};
pub use gregorian::GregorianSchema;
pub use julian::JulianSchema;
pub use tabular_islamic::TabularIslamicSchema;
pub use world::WorldSchema;

/// Exhaustively check the round-trip and monotonicity laws of a schema over a
/// window of years.
#[cfg(test)]
pub(crate) fn assert_schema_laws<S: crate::CalendarSchema>(
    years: core::ops::RangeInclusive<i32>,
) {
    for year in years {
        let start = S::start_of_year(year);
        assert_eq!(S::days_since_epoch(year, 1, 1), start);

        // Walking every (month, day) in order must produce consecutive day
        // counts: round-trip and strict monotonicity in one sweep.
        let mut days = start;
        for month in 1..=S::months_in_year(year) {
            assert_eq!(S::start_of_month(year, month), days, "start of {year}-{month}");
            for day in 1..=S::days_in_month(year, month) {
                assert_eq!(S::days_since_epoch(year, month, day), days);
                assert_eq!(S::date_parts(days), Ok((year, month, day)));
                days += 1;
            }
            assert_eq!(S::end_of_month(year, month), days - 1);
        }
        assert_eq!(days, start + S::days_in_year(year) as i64);
        assert_eq!(S::end_of_year(year), days - 1);

        let (last_month, last_day) = S::last_month_day_in_year(year);
        assert_eq!(S::end_of_year(year), S::days_since_epoch(year, last_month, last_day));

        for day_of_year in 1..=S::days_in_year(year) {
            let count = S::days_since_epoch_ordinal(year, day_of_year);
            assert_eq!(S::ordinal_parts(count), Ok((year, day_of_year)));
        }
    }
}
