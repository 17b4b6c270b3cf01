// This file is part of kalends.

//! Common types shared by every calendar: the day of the week.

/// A day of the week, numbered the ISO-8601 way.
///
/// ```rust
/// use kalends::Weekday;
///
/// assert_eq!(1, Weekday::Monday as usize);
/// assert_eq!(7, Weekday::Sunday as usize);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)] // this type is stable
pub enum Weekday {
    /// The first day of the ISO week.
    Monday = 1,
    /// The second day of the ISO week.
    Tuesday,
    /// The third day of the ISO week.
    Wednesday,
    /// The fourth day of the ISO week.
    Thursday,
    /// The fifth day of the ISO week.
    Friday,
    /// The sixth day of the ISO week.
    Saturday,
    /// The seventh day of the ISO week.
    Sunday,
}

impl Weekday {
    /// Construct a weekday from a number of days elapsed since a Monday.
    ///
    /// The input must already be reduced modulo 7.
    pub(crate) const fn from_days_since_monday(days: u8) -> Self {
        match days {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// The ISO-8601 weekday number, `1` for Monday through `7` for Sunday.
    pub const fn number_from_monday(self) -> u8 {
        self as u8
    }

    /// Days from `other` forward to `self`, in `0..=6`.
    pub(crate) const fn days_after(self, other: Weekday) -> i32 {
        (self as i32 - other as i32).rem_euclid(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_numbers() {
        assert_eq!(Weekday::Monday.number_from_monday(), 1);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        assert_eq!(Weekday::from_days_since_monday(0), Weekday::Monday);
        assert_eq!(Weekday::from_days_since_monday(6), Weekday::Sunday);
    }

    #[test]
    fn days_after_is_mod_seven() {
        assert_eq!(Weekday::Friday.days_after(Weekday::Friday), 0);
        assert_eq!(Weekday::Monday.days_after(Weekday::Sunday), 1);
        assert_eq!(Weekday::Sunday.days_after(Weekday::Monday), 6);
    }
}
