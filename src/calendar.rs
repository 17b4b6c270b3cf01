// This file is part of kalends.

use crate::day_number::DayNumber;
use crate::schema::CalendarSchema;
use crate::scope::CalendarScope;
use core::fmt;

/// A calendar: one schema bound to an epoch anchor and a supported range.
///
/// Implementations are zero-sized tags; everything a [`crate::Date`] needs is
/// resolved from these associated items at compile time, so there are no
/// per-calendar singletons to initialize and no initialization order to get
/// right.
///
/// Implementors outside this crate should pair a [`CalendarScope`] built with
/// [`CalendarScope::try_new`] with day bounds taken from their schema's
/// `start_of_year`/`end_of_year`, so the scope genuinely covers the years it
/// claims.
pub trait Calendar: Copy + Eq + fmt::Debug + 'static {
    /// The arithmetic rules of this calendar.
    type Schema: CalendarSchema;

    /// The day number of day 1 of year 1 of this calendar.
    const EPOCH: DayNumber;

    /// The dates this calendar accepts.
    const SCOPE: CalendarScope;

    /// A name for debug printing.
    fn debug_name() -> &'static str;

    /// The smallest and largest supported day numbers.
    fn domain() -> (DayNumber, DayNumber) {
        (
            Self::EPOCH + Self::SCOPE.min_day(),
            Self::EPOCH + Self::SCOPE.max_day(),
        )
    }
}
