use crate::prelude::*;

/// Date component named by a [`RangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateElement {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day of month")]
    DayOfMonth,
    #[display(fmt = "day of year")]
    DayOfYear,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "day of quarter")]
    DayOfQuarter,
}

/// A structurally well-formed date whose field lies outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{value} {element} is not in range {min}-{max} in {year}")]
pub struct RangeError {
    /// The offending component.
    pub element: DateElement,
    /// The value that was supplied for it.
    pub value:   u16,
    /// The year the range was computed for.
    pub year:    u16,
    /// Smallest accepted value (inclusive).
    pub min:     u16,
    /// Largest accepted value (inclusive).
    pub max:     u16,
}

impl RangeError {
    pub(crate) fn check(element: DateElement, value: u16, year: u16, min: u16, max: u16) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self {
                element,
                value,
                year,
                min,
                max,
            })
        }
    }
}

/// Input that does not match any supported date grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unexpected token {token:?} after {after_token:?} in {value:?}, expected {expected}")]
pub struct UnexpectedTokenError {
    /// The full input.
    pub value:       String,
    /// The part of the input that did not fit, or a description of it such as `"2-digits"`.
    pub token:       String,
    /// What was matched immediately before the token.
    pub after_token: String,
    /// What the grammar expected at this position.
    pub expected:    String,
}

impl UnexpectedTokenError {
    pub(crate) fn new(
        value: impl Into<String>,
        token: impl Into<String>,
        after_token: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            value:       value.into(),
            token:       token.into(),
            after_token: after_token.into(),
            expected:    expected.into(),
        }
    }
}

/// Error returned when parsing a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not have the shape of a supported date.
    #[error(transparent)]
    UnexpectedToken(#[from] UnexpectedTokenError),

    /// The input is well formed but names a date that does not exist.
    #[error(transparent)]
    Range(#[from] RangeError),
}
