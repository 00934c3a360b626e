//! Closed-form conversions between calendar dates and serial day numbers.
//!
//! The conversions shift the calendar year to start in March so leap days
//! land at the end of the shifted year, then bucket days by 400-year,
//! 4-year, and 5-month blocks using fixed constants. No tables, no loops.

// Casts back to the component types are range-checked above them.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

const DAYS_PER_5_MONTHS: i64 = 153;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_400_YEARS: i64 = 146_097;
const GREGORIAN_SDN_OFFSET: i64 = 32_045;
const JULIAN_SDN_OFFSET: i64 = 32_083;

/// Largest SDN representable in the 22-bit packed date encoding.
pub const MAX_SDN: u32 = 4_194_303;

/// Convert a proleptic Gregorian date to its serial day number.
///
/// Returns the sentinel `0` for `year == 0`, a month outside 1-12, a day
/// outside 1-31, any date before the epoch (25 Nov 4714 BCE), or a date
/// beyond [`MAX_SDN`]. Callers must check for `0`; this function never
/// fails through an error channel.
#[must_use]
pub fn gregorian_to_sdn(year: i32, month: u32, day: u32) -> u32 {
    if year == 0 || year < -4714 {
        return 0;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return 0;
    }
    if year == -4714 && (month < 11 || (month == 11 && day < 25)) {
        return 0;
    }

    // Shift to a year starting in March; there is no year 0, so BCE years
    // are one closer to zero than their astronomical count suggests.
    let mut shifted_year =
        i64::from(year) + if year < 0 { 4801 } else { 4800 };
    let month = i64::from(month);
    let shifted_month = if month > 2 {
        month - 3
    } else {
        shifted_year -= 1;
        month + 9
    };

    let sdn = (shifted_year / 100) * DAYS_PER_400_YEARS / 4
        + (shifted_year % 100) * DAYS_PER_4_YEARS / 4
        + (shifted_month * DAYS_PER_5_MONTHS + 2) / 5
        + i64::from(day)
        - GREGORIAN_SDN_OFFSET;

    if (1..=i64::from(MAX_SDN)).contains(&sdn) {
        sdn as u32
    } else {
        0
    }
}

/// Split a serial day number into a proleptic Gregorian (year, month, day).
///
/// Returns `(0, 0, 0)` for the sentinel `0`.
#[must_use]
pub fn sdn_to_gregorian(sdn: u32) -> (i32, u32, u32) {
    if sdn == 0 {
        return (0, 0, 0);
    }

    let mut temp = (i64::from(sdn) + GREGORIAN_SDN_OFFSET) * 4 - 1;
    let century = temp / DAYS_PER_400_YEARS;

    temp = (temp % DAYS_PER_400_YEARS) / 4 * 4 + 3;
    let mut year = century * 100 + temp / DAYS_PER_4_YEARS;
    let day_of_year = (temp % DAYS_PER_4_YEARS) / 4 + 1;

    temp = day_of_year * 5 - 3;
    let mut month = temp / DAYS_PER_5_MONTHS;
    let day = (temp % DAYS_PER_5_MONTHS) / 5 + 1;

    // Back from the March-start year to a January-start year.
    if month < 10 {
        month += 3;
    } else {
        year += 1;
        month -= 9;
    }

    year -= 4800;
    if year <= 0 {
        year -= 1;
    }
    (year as i32, month as u32, day as u32)
}

/// Convert a Julian calendar date to its serial day number.
///
/// Same contract as [`gregorian_to_sdn`]; the Julian epoch is 2 Jan
/// 4713 BCE (1 Jan 4713 BCE is day 0, outside the valid range).
#[must_use]
pub fn julian_to_sdn(year: i32, month: u32, day: u32) -> u32 {
    if year == 0 || year < -4713 {
        return 0;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return 0;
    }

    let mut shifted_year =
        i64::from(year) + if year < 0 { 4801 } else { 4800 };
    let month = i64::from(month);
    let shifted_month = if month > 2 {
        month - 3
    } else {
        shifted_year -= 1;
        month + 9
    };

    let sdn = shifted_year * DAYS_PER_4_YEARS / 4
        + (shifted_month * DAYS_PER_5_MONTHS + 2) / 5
        + i64::from(day)
        - JULIAN_SDN_OFFSET;

    if (1..=i64::from(MAX_SDN)).contains(&sdn) {
        sdn as u32
    } else {
        0
    }
}

/// Split a serial day number into a Julian calendar (year, month, day).
///
/// Returns `(0, 0, 0)` for the sentinel `0`.
#[must_use]
pub fn sdn_to_julian(sdn: u32) -> (i32, u32, u32) {
    if sdn == 0 {
        return (0, 0, 0);
    }

    let temp = (i64::from(sdn) + JULIAN_SDN_OFFSET) * 4 - 1;
    let mut year = temp / DAYS_PER_4_YEARS;
    let day_of_year = temp % DAYS_PER_4_YEARS / 4 + 1;

    let temp = day_of_year * 5 - 3;
    let mut month = temp / DAYS_PER_5_MONTHS;
    let day = (temp % DAYS_PER_5_MONTHS) / 5 + 1;

    if month < 10 {
        month += 3;
    } else {
        year += 1;
        month -= 9;
    }

    year -= 4800;
    if year <= 0 {
        year -= 1;
    }
    (year as i32, month as u32, day as u32)
}

/// Leap-year test under the given calendar's rules, astronomical-style
/// numbering (year -1 is 1 BCE and leaps like year 0 would).
#[must_use]
pub fn is_leap_year(calendar: super::Calendar, year: i32) -> bool {
    // Map BCE years onto the zero-based axis the leap rules expect.
    let y = if year < 0 { year + 1 } else { year };
    match calendar {
        super::Calendar::Gregorian => {
            y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
        }
        super::Calendar::Julian => y % 4 == 0,
    }
}

/// Number of days in the given month under the given calendar.
#[must_use]
pub fn days_in_month(calendar: super::Calendar, year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(calendar, year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
