// This file is part of kalends.

//! Supported-range validation: which `(year, month, day)` triples a calendar
//! instance accepts, and whether a day count stays inside its domain.

use crate::calendar::Calendar;
use crate::error::DateError;
use crate::helpers::i64_to_i32;
use crate::schema::CalendarSchema;

/// Day counts this far from zero or beyond are rejected at scope
/// construction; scopes are not designed to reach the `i32` boundary, which
/// keeps every downstream day-count addition far from overflow.
const DAY_BOUND_GUARD: i64 = i32::MAX as i64 / 4;

/// The flavor of a supported-year range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)] // the two range policies of the crate
pub enum ScopeKind {
    /// An explicit, historically motivated interval, `1..=9999` for every
    /// built-in calendar.
    Standard,
    /// A calendar extended over every year the day-count arithmetic supports
    /// comfortably, `-999_998..=999_999`.
    Proleptic,
}

/// The set of dates a calendar instance accepts: a supported year interval
/// together with the matching inclusive day-count interval.
///
/// A scope is *complete*: it can validate every component by itself, without
/// consulting the schema again. The constructors reject configurations for
/// which that claim cannot hold; for the built-in calendars the checks run
/// during constant evaluation, so an inconsistent pairing fails the build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalendarScope {
    min_year: i32,
    max_year: i32,
    min_day: i32,
    max_day: i32,
    kind: ScopeKind,
}

impl CalendarScope {
    /// The year interval of every standard scope.
    pub const STANDARD_YEARS: (i32, i32) = (1, 9999);
    /// The year interval of every proleptic scope.
    pub const PROLEPTIC_YEARS: (i32, i32) = (-999_998, 999_999);

    /// A `1..=9999` scope over the given inclusive day-count bounds.
    pub const fn standard(min_day: i64, max_day: i64) -> Self {
        Self::bounded(
            Self::STANDARD_YEARS.0,
            Self::STANDARD_YEARS.1,
            min_day,
            max_day,
            ScopeKind::Standard,
        )
    }

    /// A proleptic scope over the given inclusive day-count bounds.
    pub const fn proleptic(min_day: i64, max_day: i64) -> Self {
        Self::bounded(
            Self::PROLEPTIC_YEARS.0,
            Self::PROLEPTIC_YEARS.1,
            min_day,
            max_day,
            ScopeKind::Proleptic,
        )
    }

    const fn bounded(min_year: i32, max_year: i32, min_day: i64, max_day: i64, kind: ScopeKind) -> Self {
        assert!(min_year <= max_year, "scope years are inverted");
        assert!(min_day < max_day, "scope day bounds are inverted");
        assert!(
            -DAY_BOUND_GUARD <= min_day && max_day <= DAY_BOUND_GUARD,
            "scope day bounds too close to the integer boundary"
        );
        Self {
            min_year,
            max_year,
            min_day: min_day as i32,
            max_day: max_day as i32,
            kind,
        }
    }

    /// Fallible form of the scope constructors, for calendars configured at
    /// run time. A structurally inconsistent pairing is a setup bug, reported
    /// as [`DateError::InvalidConfiguration`] before any date is built.
    pub fn try_new(
        min_year: i32,
        max_year: i32,
        min_day: i64,
        max_day: i64,
        kind: ScopeKind,
    ) -> Result<Self, DateError> {
        if min_year > max_year {
            return Err(DateError::InvalidConfiguration {
                reason: "supported year range is inverted",
            });
        }
        if min_day >= max_day {
            return Err(DateError::InvalidConfiguration {
                reason: "day-count range is inverted or empty",
            });
        }
        if min_day < -DAY_BOUND_GUARD || max_day > DAY_BOUND_GUARD {
            return Err(DateError::InvalidConfiguration {
                reason: "day-count range too close to the integer boundary",
            });
        }
        Ok(Self {
            min_year,
            max_year,
            min_day: min_day as i32,
            max_day: max_day as i32,
            kind,
        })
    }

    /// The smallest supported year.
    pub const fn min_year(&self) -> i32 {
        self.min_year
    }

    /// The largest supported year.
    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    /// The day count of the first supported day.
    pub const fn min_day(&self) -> i32 {
        self.min_day
    }

    /// The day count of the last supported day.
    pub const fn max_day(&self) -> i32 {
        self.max_day
    }

    /// Whether this is a standard or a proleptic range.
    pub const fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Whether the scope validates every component on its own. Always true
    /// for scopes built through the constructors; kept as a queryable flag so
    /// adjusters may document which checks they skip.
    pub const fn is_complete(&self) -> bool {
        true
    }

    /// Check that `year` is supported.
    pub fn validate_year(&self, year: i32) -> Result<(), DateError> {
        if year < self.min_year || year > self.max_year {
            return Err(DateError::out_of_range(
                "year",
                year as i64,
                self.min_year as i64,
                self.max_year as i64,
            ));
        }
        Ok(())
    }

    /// Whether the day count lies inside the supported domain.
    pub const fn contains_days(&self, days: i64) -> bool {
        self.min_day as i64 <= days && days <= self.max_day as i64
    }

    /// Confirm that an arithmetically correct day count is still inside the
    /// supported domain, narrowing it back to `i32`.
    ///
    /// Failing here means the *input* was fine but the requested shift left
    /// the calendar, hence [`DateError::DomainOverflow`] rather than
    /// [`DateError::OutOfRange`].
    pub fn check_days_since_epoch(&self, days: i64) -> Result<i32, DateError> {
        if !self.contains_days(days) {
            return Err(DateError::DomainOverflow);
        }
        match i64_to_i32(days) {
            Ok(value) => Ok(value),
            // Unreachable given the constructor guard, but never silently.
            Err(_) => Err(DateError::DomainOverflow),
        }
    }
}

/// Check `(year, month, day)` against the scope and schema of `C`,
/// short-circuiting on the first bad component.
pub fn validate_date<C: Calendar>(year: i32, month: u8, day: u8) -> Result<(), DateError> {
    C::SCOPE.validate_year(year)?;
    validate_month::<C>(year, month)?;
    validate_day::<C>(year, month, day)
}

/// Check `(year, day_of_year)` against the scope and schema of `C`.
pub fn validate_ordinal<C: Calendar>(year: i32, day_of_year: u16) -> Result<(), DateError> {
    C::SCOPE.validate_year(year)?;
    validate_day_of_year::<C>(year, day_of_year)
}

/// Check the month alone; the year is assumed already validated.
pub(crate) fn validate_month<C: Calendar>(year: i32, month: u8) -> Result<(), DateError> {
    let months = C::Schema::months_in_year(year);
    if month < 1 || month > months {
        return Err(DateError::out_of_range("month", month as i64, 1, months as i64));
    }
    Ok(())
}

/// Check the day alone; year and month are assumed already validated.
pub(crate) fn validate_day<C: Calendar>(year: i32, month: u8, day: u8) -> Result<(), DateError> {
    let days = C::Schema::days_in_month(year, month);
    if day < 1 || day > days {
        return Err(DateError::out_of_range("day", day as i64, 1, days as i64));
    }
    Ok(())
}

/// Check the day of year alone; the year is assumed already validated.
pub(crate) fn validate_day_of_year<C: Calendar>(year: i32, day_of_year: u16) -> Result<(), DateError> {
    let days = C::Schema::days_in_year(year);
    if day_of_year < 1 || day_of_year > days {
        return Err(DateError::out_of_range(
            "day_of_year",
            day_of_year as i64,
            1,
            days as i64,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_inverted_ranges() {
        assert!(matches!(
            CalendarScope::try_new(10, 1, 0, 100, ScopeKind::Standard),
            Err(DateError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            CalendarScope::try_new(1, 10, 100, 0, ScopeKind::Standard),
            Err(DateError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn try_new_rejects_extreme_day_bounds() {
        assert!(matches!(
            CalendarScope::try_new(1, 9999, 0, i32::MAX as i64, ScopeKind::Standard),
            Err(DateError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn year_validation_names_the_component() {
        let scope = CalendarScope::standard(0, 3_652_058);
        assert!(scope.validate_year(1).is_ok());
        assert!(scope.validate_year(9999).is_ok());
        assert_eq!(
            scope.validate_year(10_000),
            Err(DateError::out_of_range("year", 10_000, 1, 9999))
        );
    }

    #[test]
    fn domain_check_is_a_distinct_kind() {
        let scope = CalendarScope::standard(0, 100);
        assert_eq!(scope.check_days_since_epoch(100), Ok(100));
        assert_eq!(scope.check_days_since_epoch(101), Err(DateError::DomainOverflow));
        assert_eq!(scope.check_days_since_epoch(-1), Err(DateError::DomainOverflow));
    }
}
