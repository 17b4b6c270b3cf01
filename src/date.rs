// This file is part of kalends.

use crate::calendar::Calendar;
use crate::day_number::DayNumber;
use crate::error::DateError;
use crate::schema::{
    BlankDaySchema, CalendarSchema, EpagomenalSchema, IntercalarySchema, SupplementarySchema,
    VirtualMonthSchema,
};
use crate::scope::{self, validate_date, validate_ordinal};
use crate::types::Weekday;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Sub;

/// A date in the calendar `C`: an immutable, always-valid day count since
/// the calendar's epoch.
///
/// One generic type serves every calendar; all semantic queries delegate to
/// the schema and scope bound by `C`. Dates of the same calendar compare and
/// subtract directly; dates of different calendars can be compared through
/// their [day numbers](Self::day_number) or converted with
/// [`Self::to_calendar`].
///
/// ```rust
/// use kalends::{Civil, Date, Weekday};
///
/// let date = Date::<Civil>::try_new(2023, 3, 15)?;
/// assert_eq!(date.year_month_day(), (2023, 3, 15));
/// assert_eq!(date.day_of_week(), Weekday::Wednesday);
///
/// let later = date.plus_days(20)?;
/// assert_eq!(later.year_month_day(), (2023, 4, 4));
/// # Ok::<(), kalends::DateError>(())
/// ```
pub struct Date<C: Calendar> {
    /// Days since `C::EPOCH`, always inside `C::SCOPE`.
    days: i32,
    marker: PhantomData<C>,
}

impl<C: Calendar> Date<C> {
    /// The first supported date of the calendar.
    pub const MIN: Self = Self::from_days_unchecked(C::SCOPE.min_day());

    /// The last supported date of the calendar.
    pub const MAX: Self = Self::from_days_unchecked(C::SCOPE.max_day());

    /// Wrap a day count already known to be inside the scope.
    pub(crate) const fn from_days_unchecked(days: i32) -> Self {
        debug_assert!(C::SCOPE.contains_days(days as i64));
        Self {
            days,
            marker: PhantomData,
        }
    }

    /// Wrap a wide day count that validation has just proven to be in scope.
    fn from_days_in_scope(days: i64) -> Self {
        debug_assert!(C::SCOPE.contains_days(days));
        Self::from_days_unchecked(days as i32)
    }

    /// Construct a date from year, month and day of month.
    ///
    /// ```rust
    /// use kalends::{Coptic, Date, DateError};
    ///
    /// let date = Date::<Coptic>::try_new(1686, 4, 24)?;
    /// assert_eq!(date.day_of_year(), 114);
    ///
    /// // Month 4 has 30 days.
    /// assert_eq!(
    ///     Date::<Coptic>::try_new(1686, 4, 31),
    ///     Err(DateError::OutOfRange { field: "day", value: 31, min: 1, max: 30 }),
    /// );
    /// # Ok::<(), DateError>(())
    /// ```
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        validate_date::<C>(year, month, day)?;
        Ok(Self::from_days_in_scope(C::Schema::days_since_epoch(
            year, month, day,
        )))
    }

    /// Construct a date from year and one-based day of year.
    pub fn try_from_ordinal(year: i32, day_of_year: u16) -> Result<Self, DateError> {
        validate_ordinal::<C>(year, day_of_year)?;
        Ok(Self::from_days_in_scope(
            C::Schema::days_since_epoch_ordinal(year, day_of_year),
        ))
    }

    /// Construct a date from a global day number.
    ///
    /// Fails with [`DateError::OutOfRange`] on the `day_number` component when
    /// the day lies outside the calendar's supported domain.
    pub fn try_from_day_number(day_number: DayNumber) -> Result<Self, DateError> {
        let days = day_number.const_diff(C::EPOCH);
        if !C::SCOPE.contains_days(days) {
            let (min, max) = C::domain();
            return Err(DateError::out_of_range(
                "day_number",
                day_number.value() as i64,
                min.value() as i64,
                max.value() as i64,
            ));
        }
        Ok(Self::from_days_in_scope(days))
    }

    /// The count of days since the calendar's epoch.
    pub const fn days_since_epoch(self) -> i32 {
        self.days
    }

    /// The position of this date on the global day axis.
    pub fn day_number(self) -> DayNumber {
        C::EPOCH + self.days
    }

    fn parts(self) -> (i32, u8, u8) {
        match C::Schema::date_parts(self.days as i64) {
            Ok(parts) => parts,
            // Unreachable: the scope keeps stored counts well inside `i32`.
            Err(_) => (C::SCOPE.min_year(), 1, 1),
        }
    }

    /// The year, month and day of month, decomposed in one call.
    pub fn year_month_day(self) -> (i32, u8, u8) {
        self.parts()
    }

    /// The year.
    pub fn year(self) -> i32 {
        self.parts().0
    }

    /// The one-based month of year.
    pub fn month(self) -> u8 {
        self.parts().1
    }

    /// The one-based day of month.
    pub fn day(self) -> u8 {
        self.parts().2
    }

    /// The one-based day of year.
    pub fn day_of_year(self) -> u16 {
        match C::Schema::ordinal_parts(self.days as i64) {
            Ok((_, day_of_year)) => day_of_year,
            // Unreachable, as in `parts`.
            Err(_) => 1,
        }
    }

    /// The day of the week.
    pub fn day_of_week(self) -> Weekday {
        self.day_number().day_of_week()
    }

    /// Whether this date's year is a leap year.
    pub fn is_in_leap_year(self) -> bool {
        C::Schema::is_leap_year(self.year())
    }

    /// The number of days in this date's year.
    pub fn days_in_year(self) -> u16 {
        C::Schema::days_in_year(self.year())
    }

    /// The number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        let (year, month, _) = self.parts();
        C::Schema::days_in_month(year, month)
    }

    /// The number of months in this date's year.
    pub fn months_in_year(self) -> u8 {
        C::Schema::months_in_year(self.year())
    }

    /// Move by `days` days.
    ///
    /// Fails with [`DateError::ArithmeticOverflow`] if the addition itself
    /// overflows, and with [`DateError::DomainOverflow`] if the sum is a
    /// perfectly good day count that no longer belongs to the calendar.
    pub fn plus_days(self, days: i32) -> Result<Self, DateError> {
        let sum = self
            .days
            .checked_add(days)
            .ok_or(DateError::ArithmeticOverflow)?;
        C::SCOPE
            .check_days_since_epoch(sum as i64)
            .map(Self::from_days_unchecked)
    }

    /// The next day.
    pub fn next_day(self) -> Result<Self, DateError> {
        self.plus_days(1)
    }

    /// The previous day.
    pub fn previous_day(self) -> Result<Self, DateError> {
        self.plus_days(-1)
    }

    /// The number of days from `other` to `self` (negative when `other` is
    /// later). Total within a scope: the difference of two in-scope day
    /// counts always fits.
    pub fn days_since(self, other: Self) -> i32 {
        self.days - other.days
    }

    /// Replace the year, keeping month and day; re-validates the parts the
    /// change can affect.
    pub fn with_year(self, year: i32) -> Result<Self, DateError> {
        let (_, month, day) = self.parts();
        C::SCOPE.validate_year(year)?;
        scope::validate_month::<C>(year, month)?;
        scope::validate_day::<C>(year, month, day)?;
        Ok(Self::from_days_in_scope(C::Schema::days_since_epoch(
            year, month, day,
        )))
    }

    /// Replace the month, keeping year and day; re-validates month and day.
    pub fn with_month(self, month: u8) -> Result<Self, DateError> {
        let (year, _, day) = self.parts();
        scope::validate_month::<C>(year, month)?;
        scope::validate_day::<C>(year, month, day)?;
        Ok(Self::from_days_in_scope(C::Schema::days_since_epoch(
            year, month, day,
        )))
    }

    /// Replace the day of month; re-validates only the day.
    pub fn with_day(self, day: u8) -> Result<Self, DateError> {
        let (year, month, _) = self.parts();
        scope::validate_day::<C>(year, month, day)?;
        Ok(Self::from_days_in_scope(C::Schema::days_since_epoch(
            year, month, day,
        )))
    }

    /// Replace the day of year; re-validates only the day of year.
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Self, DateError> {
        let year = self.year();
        scope::validate_day_of_year::<C>(year, day_of_year)?;
        Ok(Self::from_days_in_scope(
            C::Schema::days_since_epoch_ordinal(year, day_of_year),
        ))
    }

    /// The first day of this date's year.
    ///
    /// Year and month boundaries of an in-scope date are themselves in scope,
    /// so these four lookups cannot fail.
    pub fn start_of_year(self) -> Self {
        Self::from_days_in_scope(C::Schema::start_of_year(self.year()))
    }

    /// The last day of this date's year.
    pub fn end_of_year(self) -> Self {
        Self::from_days_in_scope(C::Schema::end_of_year(self.year()))
    }

    /// The first day of this date's month.
    pub fn start_of_month(self) -> Self {
        let (year, month, _) = self.parts();
        Self::from_days_in_scope(C::Schema::start_of_month(year, month))
    }

    /// The last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let (year, month, _) = self.parts();
        Self::from_days_in_scope(C::Schema::end_of_month(year, month))
    }

    fn rewrap(day_number: Option<DayNumber>) -> Result<Self, DateError> {
        let day_number = day_number.ok_or(DateError::ArithmeticOverflow)?;
        C::SCOPE
            .check_days_since_epoch(day_number.const_diff(C::EPOCH))
            .map(Self::from_days_unchecked)
    }

    /// The closest date with weekday `weekday` strictly before this one.
    ///
    /// The navigation itself happens on the day-number axis; the result is
    /// then checked against the calendar's domain and reported as
    /// [`DateError::DomainOverflow`] when the shift ran off its end.
    pub fn previous(self, weekday: Weekday) -> Result<Self, DateError> {
        Self::rewrap(self.day_number().previous(weekday))
    }

    /// This date if it falls on `weekday`, otherwise [`Self::previous`].
    pub fn previous_or_same(self, weekday: Weekday) -> Result<Self, DateError> {
        Self::rewrap(self.day_number().previous_or_same(weekday))
    }

    /// The date with weekday `weekday` nearest to this one, at most 3 days
    /// away.
    ///
    /// ```rust
    /// use kalends::{Civil, Date, Weekday};
    ///
    /// // 2023-03-15 is a Wednesday.
    /// let date = Date::<Civil>::try_new(2023, 3, 15)?;
    /// let friday = date.nearest(Weekday::Friday)?;
    /// assert_eq!(friday.year_month_day(), (2023, 3, 17));
    /// let sunday = date.nearest(Weekday::Sunday)?;
    /// assert_eq!(sunday.year_month_day(), (2023, 3, 12));
    /// # Ok::<(), kalends::DateError>(())
    /// ```
    pub fn nearest(self, weekday: Weekday) -> Result<Self, DateError> {
        Self::rewrap(self.day_number().nearest(weekday))
    }

    /// This date if it falls on `weekday`, otherwise [`Self::next`].
    pub fn next_or_same(self, weekday: Weekday) -> Result<Self, DateError> {
        Self::rewrap(self.day_number().next_or_same(weekday))
    }

    /// The closest date with weekday `weekday` strictly after this one.
    pub fn next(self, weekday: Weekday) -> Result<Self, DateError> {
        Self::rewrap(self.day_number().next(weekday))
    }

    /// This date expressed in another calendar, through the shared day axis.
    pub fn to_calendar<C2: Calendar>(self) -> Result<Date<C2>, DateError> {
        Date::<C2>::try_from_day_number(self.day_number())
    }
}

impl<C: Calendar> Date<C>
where
    C::Schema: IntercalarySchema,
{
    /// Whether this is the calendar's leap-inserted day.
    pub fn is_intercalary_day(self) -> bool {
        let (year, month, day) = self.parts();
        C::Schema::is_intercalary_day(year, month, day)
    }
}

impl<C: Calendar> Date<C>
where
    C::Schema: EpagomenalSchema,
{
    /// The one-based epagomenal position of this day, or `None` for a
    /// regular day.
    pub fn epagomenal_number(self) -> Option<u8> {
        let (year, month, day) = self.parts();
        C::Schema::epagomenal_number(year, month, day)
    }

    /// Whether this is an epagomenal day.
    pub fn is_epagomenal_day(self) -> bool {
        self.epagomenal_number().is_some()
    }
}

impl<C: Calendar> Date<C>
where
    C::Schema: SupplementarySchema,
{
    /// Whether this day sits outside the regular month structure.
    pub fn is_supplementary_day(self) -> bool {
        let (year, month, day) = self.parts();
        C::Schema::is_supplementary_day(year, month, day)
    }
}

impl<C: Calendar> Date<C>
where
    C::Schema: BlankDaySchema,
{
    /// Whether this is a blank day, outside the weekday cycle.
    pub fn is_blank_day(self) -> bool {
        let (year, month, day) = self.parts();
        C::Schema::is_blank_day(year, month, day)
    }
}

impl<C: Calendar> Date<C>
where
    C::Schema: VirtualMonthSchema,
{
    /// The index of the calendar's virtual month.
    pub fn virtual_month(self) -> u8 {
        <C::Schema as VirtualMonthSchema>::VIRTUAL_MONTH
    }
}

// Manual impls: the derives would demand the same bounds of `C` itself,
// which a zero-sized calendar tag has no reason to carry.
impl<C: Calendar> Copy for Date<C> {}

impl<C: Calendar> Clone for Date<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Calendar> PartialEq for Date<C> {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl<C: Calendar> Eq for Date<C> {}

impl<C: Calendar> PartialOrd for Date<C> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Calendar> Ord for Date<C> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.days.cmp(&other.days)
    }
}

impl<C: Calendar> Hash for Date<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.days.hash(state);
    }
}

impl<C: Calendar> fmt::Debug for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (year, month, day) = self.parts();
        write!(f, "{year:04}-{month:02}-{day:02} ({})", C::debug_name())
    }
}

/// The number of days from `rhs` to `self`.
impl<C: Calendar> Sub for Date<C> {
    type Output = i32;
    fn sub(self, rhs: Self) -> Self::Output {
        self.days_since(rhs)
    }
}
