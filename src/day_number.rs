// This file is part of kalends.

//! The global day count anchoring every calendar to a single reference point.

use crate::types::Weekday;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An absolute day position: the number of days elapsed since the reference
/// day zero, which is 0001-01-01 of the proleptic Gregorian calendar
/// (a Monday).
///
/// All calendars in this crate locate their epochs on this one axis, which is
/// what makes dates of different calendars comparable.
///
/// `DayNumber` is not designed to store values near the `i32` boundary; the
/// checked operations report such values as overflow, and the operator forms
/// debug-assert against them.
///
/// ```rust
/// use kalends::{DayNumber, Weekday};
///
/// let day = DayNumber::new(0);
/// assert_eq!(day.day_of_week(), Weekday::Monday);
/// assert_eq!((day + 7).day_of_week(), Weekday::Monday);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(i32);

impl DayNumber {
    /// The reference day itself.
    pub const ZERO: DayNumber = DayNumber(0);

    /// Create a day number from a count of days since the reference day.
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// The count of days since the reference day.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Difference in days, computed without narrowing.
    pub(crate) const fn const_diff(self, rhs: Self) -> i64 {
        self.0 as i64 - rhs.0 as i64
    }

    /// Shift by a number of days, reporting `None` when the result is not
    /// representable.
    pub const fn checked_add_days(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The day of the week, derived from the Monday anchored at day zero.
    pub const fn day_of_week(self) -> Weekday {
        Weekday::from_days_since_monday(self.0.rem_euclid(7) as u8)
    }

    /// The closest day with weekday `weekday` strictly before this one,
    /// between 1 and 7 days back.
    pub const fn previous(self, weekday: Weekday) -> Option<Self> {
        let back = self.day_of_week().days_after(weekday);
        self.checked_add_days(if back == 0 { -7 } else { -back })
    }

    /// This day if it falls on `weekday`, otherwise [`Self::previous`].
    pub const fn previous_or_same(self, weekday: Weekday) -> Option<Self> {
        self.checked_add_days(-self.day_of_week().days_after(weekday))
    }

    /// The day with weekday `weekday` closest to this one, at most 3 days
    /// away in either direction.
    ///
    /// A single closed form: the latest matching day on or before the day
    /// three days ahead. Because a week has an odd length there is never a
    /// true tie to break.
    pub const fn nearest(self, weekday: Weekday) -> Option<Self> {
        match self.checked_add_days(3) {
            Some(ahead) => ahead.previous_or_same(weekday),
            None => None,
        }
    }

    /// This day if it falls on `weekday`, otherwise [`Self::next`].
    pub const fn next_or_same(self, weekday: Weekday) -> Option<Self> {
        self.checked_add_days(weekday.days_after(self.day_of_week()))
    }

    /// The closest day with weekday `weekday` strictly after this one,
    /// between 1 and 7 days ahead.
    pub const fn next(self, weekday: Weekday) -> Option<Self> {
        let ahead = weekday.days_after(self.day_of_week());
        self.checked_add_days(if ahead == 0 { 7 } else { ahead })
    }
}

impl fmt::Debug for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let days = self.0;
        if let Ok((y, m, d)) = crate::schemas::gregorian::date_parts(days as i64) {
            write!(f, "day {days} ({y}-{m:02}-{d:02} Gregorian)")
        } else {
            write!(f, "day {days}")
        }
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shift a day number into the future; debug-asserted against overflow.
impl Add<i32> for DayNumber {
    type Output = Self;
    fn add(self, rhs: i32) -> Self::Output {
        debug_assert!(self.0.checked_add(rhs).is_some(), "day number overflow");
        Self(self.0.wrapping_add(rhs))
    }
}

impl AddAssign<i32> for DayNumber {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

/// Shift a day number into the past; debug-asserted against overflow.
impl Sub<i32> for DayNumber {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self::Output {
        debug_assert!(self.0.checked_sub(rhs).is_some(), "day number overflow");
        Self(self.0.wrapping_sub(rhs))
    }
}

impl SubAssign<i32> for DayNumber {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

/// The number of days between two day numbers.
impl Sub for DayNumber {
    type Output = i64;
    fn sub(self, rhs: Self) -> Self::Output {
        self.const_diff(rhs)
    }
}
