// This file is part of kalends.

//! The Zoroastrian calendar (Yazdegerd era): the invariable Egyptian year
//! shape anchored to Julian 632-06-16.

use crate::calendar::Calendar;
use crate::epoch;
use crate::schemas::{egyptian, Egyptian12Schema, Egyptian13Schema};
use crate::scope::CalendarScope;
use crate::DayNumber;

const SCOPE: CalendarScope = CalendarScope::standard(
    egyptian::days_since_epoch(1, 1, 1),
    egyptian::days_since_epoch(10_000, 1, 1) - 1,
);

/// The Zoroastrian calendar with the epagomenal days counted as the tail of
/// month 12.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Zoroastrian;

impl Calendar for Zoroastrian {
    type Schema = Egyptian12Schema;
    const EPOCH: DayNumber = epoch::ZOROASTRIAN;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Zoroastrian"
    }
}

/// The Zoroastrian calendar with the epagomenal days as a thirteenth month.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[allow(clippy::exhaustive_structs)] // this type is stable
pub struct Zoroastrian13;

impl Calendar for Zoroastrian13 {
    type Schema = Egyptian13Schema;
    const EPOCH: DayNumber = epoch::ZOROASTRIAN;
    const SCOPE: CalendarScope = SCOPE;

    fn debug_name() -> &'static str {
        "Zoroastrian13"
    }
}
