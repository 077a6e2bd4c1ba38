//! Conversions to and from `chrono`, enabled by the `chrono` feature.

use chrono::{Datelike, NaiveDate};

use crate::error::{DateElement, RangeError};
use crate::types::{CalendarDate, DateLike};
use crate::{IsoDate, MAX_YEAR, MIN_YEAR};

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // chrono covers years far beyond 0..=9999, so a valid date always maps.
        Self::from_ymd_opt(i32::from(date.year()), u32::from(date.month()), u32::from(date.day()))
            .expect("calendar date within chrono's range")
    }
}

impl From<IsoDate> for NaiveDate {
    fn from(date: IsoDate) -> Self {
        date.to_calendar_date().into()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = RangeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .ok()
            .filter(|year| *year <= MAX_YEAR)
            .ok_or(RangeError {
                element: DateElement::Year,
                value:   date.year().clamp(0, i32::from(u16::MAX)) as u16,
                year:    date.year().clamp(0, i32::from(u16::MAX)) as u16,
                min:     MIN_YEAR,
                max:     MAX_YEAR,
            })?;
        // chrono months and days are at most 12 and 31
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}
