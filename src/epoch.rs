// This file is part of kalends.

//! Epoch anchors: the day number of day 1 of year 1 of each calendar.
//!
//! Values are the Rata Die constants of Reingold & Dershowitz, *Calendrical
//! Calculations* (4th ed., 2018), shifted by one: R.D. 1 is day number 0.

use crate::day_number::DayNumber;

/// 0001-01-01 (proleptic Gregorian), the reference day itself.
pub const GREGORIAN: DayNumber = DayNumber::new(0);

/// The Sunday before the Gregorian epoch, 0000-12-31; the World calendar
/// starts here so that its year opens on a Sunday.
pub const SUNDAY_BEFORE_GREGORIAN: DayNumber = DayNumber::new(-1);

/// 0001-01-01 (proleptic Julian) = 0000-12-30 Gregorian.
pub const JULIAN: DayNumber = DayNumber::new(-2);

/// The Ethiopic epoch, Julian 8-08-29.
pub const ETHIOPIC: DayNumber = DayNumber::new(2_795);

/// The Coptic epoch (Era of Diocletian), Julian 284-08-29.
pub const COPTIC: DayNumber = DayNumber::new(103_604);

/// The Armenian epoch, Julian 552-07-11.
pub const ARMENIAN: DayNumber = DayNumber::new(201_442);

/// The Tabular Islamic epoch, Julian 622-07-16 (a Friday).
pub const TABULAR_ISLAMIC: DayNumber = DayNumber::new(227_014);

/// The Zoroastrian epoch (Yazdegerd era), Julian 632-06-16.
pub const ZOROASTRIAN: DayNumber = DayNumber::new(230_637);
