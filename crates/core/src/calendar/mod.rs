//! Calendar day-number math.
//!
//! This module is the only place calendar-specific arithmetic lives. It
//! converts between (year, month, day) triples in the Gregorian or Julian
//! calendar and a serial day number (SDN): a continuous count of days from
//! a fixed epoch (day 1 = 25 Nov 4714 BCE proleptic Gregorian, which is
//! 2 Jan 4713 BCE Julian). Everything above this layer works exclusively in
//! SDN space, so comparing or subtracting dates never needs component-wise
//! date arithmetic, even across the two calendars.
//!
//! Years use astronomical numbering without a year zero: `-1` is 1 BCE.
//! Invalid input is signalled by the sentinel value `0`, never by an error
//! channel; callers must check for it.

pub mod sdn;

pub use sdn::{
    MAX_SDN, days_in_month, gregorian_to_sdn, is_leap_year, julian_to_sdn,
    sdn_to_gregorian, sdn_to_julian,
};

use serde::{Deserialize, Serialize};

/// The calendar used to split an SDN into (year, month, day) components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
}

impl Calendar {
    /// Convert a date in this calendar to its SDN. Returns the sentinel
    /// `0` for invalid input.
    #[must_use]
    pub fn to_sdn(self, year: i32, month: u32, day: u32) -> u32 {
        match self {
            Calendar::Gregorian => gregorian_to_sdn(year, month, day),
            Calendar::Julian => julian_to_sdn(year, month, day),
        }
    }

    /// Split an SDN into (year, month, day) in this calendar. Returns
    /// `(0, 0, 0)` for the sentinel `0`.
    #[must_use]
    pub fn from_sdn(self, sdn: u32) -> (i32, u32, u32) {
        match self {
            Calendar::Gregorian => sdn_to_gregorian(sdn),
            Calendar::Julian => sdn_to_julian(sdn),
        }
    }
}
