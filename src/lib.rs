// This file is part of kalends.

//! Arithmetic calendars and the dates that live on them.
//!
//! Every calendar in this crate is defined by two pieces: a
//! [`CalendarSchema`] holding its pure arithmetic (month lengths, leap rule,
//! conversions between components and a linear day count) and a [`Calendar`]
//! binding that anchors the schema to an epoch on a shared day axis and to a
//! supported year range. A [`Date`] wraps a single integer, the number of
//! days since its calendar's epoch, and derives everything else on demand.
//!
//! Because all epochs are positions on the one [`DayNumber`] axis, dates of
//! different calendars convert and compare exactly.
//!
//! Some of the algorithms implemented here are based on
//! Dershowitz, Nachum, and Edward M. Reingold. _Calendrical calculations_.
//! Cambridge University Press, 2018.
//!
//! # Examples
//!
//! Basic construction and queries:
//!
//! ```rust
//! use kalends::{Civil, Date, Weekday};
//!
//! let date = Date::<Civil>::try_new(1992, 9, 2)?;
//! assert_eq!(date.day_of_week(), Weekday::Wednesday);
//! assert_eq!(date.days_in_year(), 366);
//! assert_eq!(date.days_in_month(), 30);
//! # Ok::<(), kalends::DateError>(())
//! ```
//!
//! Converting a date across calendars:
//!
//! ```rust
//! use kalends::{Civil, Coptic, Date, Ethiopic};
//!
//! let iso = Date::<Civil>::try_new(1970, 1, 2)?;
//!
//! let coptic = iso.to_calendar::<Coptic>()?;
//! assert_eq!(coptic.year_month_day(), (1686, 4, 24));
//!
//! let ethiopic = iso.to_calendar::<Ethiopic>()?;
//! assert_eq!(ethiopic.year_month_day(), (1962, 4, 24));
//! # Ok::<(), kalends::DateError>(())
//! ```
//!
//! Day arithmetic and weekday adjustment:
//!
//! ```rust
//! use kalends::{Civil, Date, Weekday};
//!
//! let date = Date::<Civil>::try_new(2023, 3, 15)?;
//! assert_eq!(date.plus_days(20)?.year_month_day(), (2023, 4, 4));
//!
//! let friday = date.next(Weekday::Friday)?;
//! assert_eq!(friday.year_month_day(), (2023, 3, 17));
//! # Ok::<(), kalends::DateError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::exhaustive_structs,
        clippy::exhaustive_enums,
        missing_debug_implementations,
    )
)]
#![warn(missing_docs)]

pub mod armenian;
mod calendar;
pub mod coptic;
mod date;
mod day_number;
pub mod epoch;
mod error;
pub mod ethiopic;
pub mod gregorian;
mod helpers;
pub mod julian;
mod schema;
pub mod schemas;
mod scope;
pub mod tabular_islamic;
mod types;
pub mod world;
pub mod zoroastrian;

#[cfg(test)]
mod tests;

pub use crate::armenian::{Armenian, Armenian13};
pub use crate::calendar::Calendar;
pub use crate::coptic::{Coptic, Coptic13};
pub use crate::date::Date;
pub use crate::day_number::DayNumber;
pub use crate::error::DateError;
pub use crate::ethiopic::{Ethiopic, Ethiopic13};
pub use crate::gregorian::{Civil, Gregorian};
pub use crate::helpers::I32CastError;
pub use crate::julian::Julian;
pub use crate::schema::{
    BlankDaySchema, CalendarSchema, EpagomenalSchema, IntercalarySchema, RegularSchema,
    SupplementarySchema, VirtualMonthSchema,
};
pub use crate::scope::{validate_date, validate_ordinal, CalendarScope, ScopeKind};
pub use crate::tabular_islamic::TabularIslamic;
pub use crate::types::Weekday;
pub use crate::world::World;
pub use crate::zoroastrian::{Zoroastrian, Zoroastrian13};
