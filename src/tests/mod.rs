// This file is part of kalends.

//! Crate-level tests exercising the public API across calendars.

mod scenarios;
