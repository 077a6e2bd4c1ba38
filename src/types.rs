use crate::calendar::{days_in_month, days_in_quarter, days_in_year, jan1_weekday, week_one_monday, weeks_in_year};
use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MAX_MONTH, MAX_QUARTER, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::error::{DateElement, RangeError};
use crate::prelude::*;

/// Capabilities shared by every ISO 8601 date representation.
pub trait DateLike {
    /// Returns the equivalent Gregorian calendar date.
    fn to_calendar_date(&self) -> CalendarDate;

    /// Checks every component against its valid range.
    ///
    /// # Errors
    /// Returns the first [`RangeError`] encountered.
    fn validate(&self) -> Result<(), RangeError>;

    /// Returns `true` if [`validate`](Self::validate) succeeds.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check_year(year: u16) -> Result<(), RangeError> {
    RangeError::check(DateElement::Year, year, year, MIN_YEAR, MAX_YEAR)
}

/// A Gregorian year, month and day: the canonical date form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl CalendarDate {
    /// Creates a calendar date, validating every component.
    ///
    /// # Errors
    /// Returns a `RangeError` naming "year", "month" or "day of month".
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, RangeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// 1-based day of the year.
    pub fn day_of_year(self) -> u16 {
        let preceding: u16 = (JANUARY..self.month)
            .map(|m| u16::from(days_in_month(self.year, m)))
            .sum();
        preceding + u16::from(self.day)
    }

    /// ISO weekday, 1 = Monday through 7 = Sunday.
    pub fn weekday(self) -> u8 {
        let jan1 = u16::from(jan1_weekday(i32::from(self.year)));
        ((jan1 + self.day_of_year() - 1) % u16::from(DAYS_IN_WEEK)) as u8 + 1
    }

    pub fn to_ordinal_date(self) -> OrdinalDate {
        OrdinalDate {
            year: self.year,
            day:  self.day_of_year(),
        }
    }

    /// Walks forward from January 1st. `day_of_year` must lie within the year.
    fn from_day_of_year(year: u16, day_of_year: u16) -> Self {
        debug_assert!(day_of_year >= 1 && day_of_year <= days_in_year(year));

        let mut month = JANUARY;
        let mut day = day_of_year;
        while month < DECEMBER && day > u16::from(days_in_month(year, month)) {
            day -= u16::from(days_in_month(year, month));
            month += 1;
        }
        // at most 31 remain
        Self { year, month, day: day as u8 }
    }
}

impl DateLike for CalendarDate {
    fn to_calendar_date(&self) -> CalendarDate {
        *self
    }

    fn validate(&self) -> Result<(), RangeError> {
        check_year(self.year)?;
        RangeError::check(DateElement::Month, self.month.into(), self.year, 1, MAX_MONTH.into())?;
        let max = days_in_month(self.year, self.month);
        RangeError::check(DateElement::DayOfMonth, self.day.into(), self.year, MIN_DAY.into(), max.into())
    }
}

/// A year and 1-based day of that year, e.g. `2012-359`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:03}", year, day)]
pub struct OrdinalDate {
    year: u16,
    day:  u16,
}

impl OrdinalDate {
    /// Creates an ordinal date, validating every component.
    ///
    /// # Errors
    /// Returns a `RangeError` naming "year" or "day of year".
    pub fn new(year: u16, day: u16) -> Result<Self, RangeError> {
        let date = Self { year, day };
        date.validate()?;
        Ok(date)
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn day(self) -> u16 {
        self.day
    }
}

impl DateLike for OrdinalDate {
    fn to_calendar_date(&self) -> CalendarDate {
        CalendarDate::from_day_of_year(self.year, self.day)
    }

    fn validate(&self) -> Result<(), RangeError> {
        check_year(self.year)?;
        RangeError::check(DateElement::DayOfYear, self.day, self.year, MIN_DAY.into(), days_in_year(self.year))
    }
}

/// An ISO week-numbering year, week and weekday (1 = Monday), e.g. `2012-W52-1`.
///
/// Week 1 is the week containing the year's first Thursday, so the first and
/// last few days of a week-numbering year can belong to the neighbouring
/// Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-W{:02}-{}", year, week, day)]
pub struct WeekDate {
    year: u16,
    week: u8,
    day:  u8,
}

impl WeekDate {
    /// Creates a week date, validating every component.
    ///
    /// # Errors
    /// Returns a `RangeError` naming "year", "day of week" or "week".
    pub fn new(year: u16, week: u8, day: u8) -> Result<Self, RangeError> {
        let date = Self { year, week, day };
        date.validate()?;
        Ok(date)
    }

    /// The week-numbering year, which may differ from the calendar year.
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn week(self) -> u8 {
        self.week
    }

    /// ISO weekday, 1 = Monday through 7 = Sunday.
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day of `self.year` this date falls on; below 1 or past the year's end
    /// when the week straddles a Gregorian year boundary.
    fn relative_day_of_year(self) -> i32 {
        week_one_monday(self.year)
            + (i32::from(self.week) - 1) * i32::from(DAYS_IN_WEEK)
            + i32::from(self.day)
            - 1
    }
}

impl DateLike for WeekDate {
    fn to_calendar_date(&self) -> CalendarDate {
        let day = self.relative_day_of_year();
        let days = i32::from(days_in_year(self.year));
        if day < 1 {
            // January 1st of year 0 is a Saturday: week 1 of year 0 never reaches back.
            let year = self.year - 1;
            CalendarDate::from_day_of_year(year, (day + i32::from(days_in_year(year))) as u16)
        } else if day > days {
            CalendarDate::from_day_of_year(self.year + 1, (day - days) as u16)
        } else {
            CalendarDate::from_day_of_year(self.year, day as u16)
        }
    }

    fn validate(&self) -> Result<(), RangeError> {
        check_year(self.year)?;
        RangeError::check(DateElement::DayOfWeek, self.day.into(), self.year, MIN_DAY.into(), DAYS_IN_WEEK.into())?;
        let weeks = weeks_in_year(i32::from(self.year));
        RangeError::check(DateElement::Week, self.week.into(), self.year, 1, weeks.into())?;

        // The last week of 9999 runs into year 10000.
        if self.year == MAX_YEAR {
            let days = i32::from(days_in_year(self.year));
            let overflow = self.relative_day_of_year() - days;
            if overflow > 0 {
                let last = u16::from(self.day) - overflow as u16;
                return RangeError::check(DateElement::DayOfWeek, self.day.into(), self.year, MIN_DAY.into(), last);
            }
        }
        Ok(())
    }
}

/// A year, quarter and 1-based day of that quarter, e.g. `2012-Q4-85`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-Q{}-{:02}", year, quarter, day)]
pub struct QuarterDate {
    year:    u16,
    quarter: u8,
    day:     u8,
}

impl QuarterDate {
    /// Creates a quarter date, validating every component.
    ///
    /// # Errors
    /// Returns a `RangeError` naming "year", "quarter" or "day of quarter".
    pub fn new(year: u16, quarter: u8, day: u8) -> Result<Self, RangeError> {
        let date = Self { year, quarter, day };
        date.validate()?;
        Ok(date)
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn quarter(self) -> u8 {
        self.quarter
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl DateLike for QuarterDate {
    fn to_calendar_date(&self) -> CalendarDate {
        let preceding: u16 = (1..self.quarter)
            .map(|q| u16::from(days_in_quarter(self.year, q)))
            .sum();
        CalendarDate::from_day_of_year(self.year, preceding + u16::from(self.day))
    }

    fn validate(&self) -> Result<(), RangeError> {
        check_year(self.year)?;
        RangeError::check(DateElement::Quarter, self.quarter.into(), self.year, 1, MAX_QUARTER.into())?;
        let max = days_in_quarter(self.year, self.quarter);
        RangeError::check(DateElement::DayOfQuarter, self.day.into(), self.year, MIN_DAY.into(), max.into())
    }
}
