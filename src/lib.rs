mod calendar;
mod consts;
mod error;
#[cfg(feature = "chrono")]
mod interop;
mod parse;
mod prelude;
mod types;

pub use calendar::{days_in_month, days_in_quarter, days_in_year, is_leap_year, weeks_in_year};
pub use consts::*;
pub use error::{DateElement, ParseError, RangeError, UnexpectedTokenError};
pub use parse::{parse_date, parse_date_bytes, parse_date_bytes_prefix, parse_date_prefix};
pub use types::{CalendarDate, DateLike, OrdinalDate, QuarterDate, WeekDate};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// Any of the four ISO 8601 date representations, as produced by [`parse_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, TryInto)]
pub enum IsoDate {
    /// `2012-12-24`
    Calendar(CalendarDate),
    /// `2012-359`
    Ordinal(OrdinalDate),
    /// `2012-W52-1`
    Week(WeekDate),
    /// `2012-Q4-85`
    Quarter(QuarterDate),
}

impl IsoDate {
    /// Returns the year as written; for week dates this is the week-numbering year.
    pub const fn year(&self) -> u16 {
        match self {
            Self::Calendar(date) => date.year(),
            Self::Ordinal(date) => date.year(),
            Self::Week(date) => date.year(),
            Self::Quarter(date) => date.year(),
        }
    }

    /// Rank used for ordering ties on the same calendar date.
    #[inline]
    const fn representation_rank(&self) -> u8 {
        match self {
            Self::Calendar(_) => 0,
            Self::Ordinal(_) => 1,
            Self::Week(_) => 2,
            Self::Quarter(_) => 3,
        }
    }
}

impl DateLike for IsoDate {
    fn to_calendar_date(&self) -> CalendarDate {
        match self {
            Self::Calendar(date) => date.to_calendar_date(),
            Self::Ordinal(date) => date.to_calendar_date(),
            Self::Week(date) => date.to_calendar_date(),
            Self::Quarter(date) => date.to_calendar_date(),
        }
    }

    fn validate(&self) -> Result<(), RangeError> {
        match self {
            Self::Calendar(date) => date.validate(),
            Self::Ordinal(date) => date.validate(),
            Self::Week(date) => date.validate(),
            Self::Quarter(date) => date.validate(),
        }
    }
}

impl FromStr for IsoDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl PartialOrd for IsoDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IsoDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare the day each value denotes first...
        match self.to_calendar_date().cmp(&other.to_calendar_date()) {
            // ...then break ties by representation.
            Ordering::Equal => self.representation_rank().cmp(&other.representation_rank()),
            ord => ord,
        }
    }
}

/// Serializes as the canonical string and deserializes through [`parse_date`].
macro_rules! impl_serde_as_str {
    ($($ty:ty),+ $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                let date = parse_date(&s).map_err(serde::de::Error::custom)?;
                Self::try_from(date).map_err(serde::de::Error::custom)
            }
        }
    )+};
}

impl_serde_as_str!(IsoDate, CalendarDate, OrdinalDate, WeekDate, QuarterDate);
