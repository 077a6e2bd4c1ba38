//! Gregorian calendar arithmetic shared by every date representation.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_QUARTER,
    FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_QUARTER_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    LONG_YEAR_WEEKS, MAX_MONTH, MAX_QUARTER, SHORT_YEAR_WEEKS,
};

/// Weekday of January 1st that makes a year long (53 weeks), counted from Monday = 0.
const THURSDAY: u8 = 3;
/// A leap year starting on Wednesday also reaches a Thursday on December 31st.
const WEDNESDAY: u8 = 2;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_quarter(year: u16, quarter: u8) -> u8 {
    debug_assert!(quarter != 0 && quarter <= MAX_QUARTER);

    if quarter == 1 && is_leap_year(year) {
        FIRST_QUARTER_DAYS_LEAP
    } else {
        DAYS_IN_QUARTER[quarter as usize]
    }
}

/// Number of ISO weeks (52 or 53) in the given week-numbering year.
///
/// Years below 1 are shifted into a congruent 400-year cycle first; the
/// weekday pattern of the Gregorian calendar repeats every 400 years.
pub const fn weeks_in_year(year: i32) -> u8 {
    let weekday = jan1_weekday(year);
    // Leap years repeat with the same 400-year period.
    let cycle_year = year.rem_euclid(GREGORIAN_CYCLE as i32) as u16;
    if weekday == THURSDAY || (weekday == WEDNESDAY && is_leap_year(cycle_year)) {
        LONG_YEAR_WEEKS
    } else {
        SHORT_YEAR_WEEKS
    }
}

/// Weekday of January 1st of `year`, with Monday = 0 and Sunday = 6.
pub(crate) const fn jan1_weekday(year: i32) -> u8 {
    let year = year as i64;
    let cycle = GREGORIAN_CYCLE as i64;
    let year = if year < 1 { year.rem_euclid(cycle) + cycle } else { year };
    let y = year - 1;
    ((y + y / 4 - y / 100 + y / 400) % 7) as u8
}

/// Day of year of the Monday that starts ISO week 1 of `year`.
///
/// Week 1 is the week holding the year's first Thursday, so its Monday can
/// fall up to three days before January 1st (a result of 0 or below).
pub(crate) const fn week_one_monday(year: u16) -> i32 {
    let jan1 = jan1_weekday(year as i32) as i32;
    let first_thursday = 1 + (THURSDAY as i32 - jan1).rem_euclid(7);
    first_thursday - 3
}
