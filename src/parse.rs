//! Single-pass dispatcher over the ISO 8601 date grammars.
//!
//! ```text
//! Basic       Extended
//! 20121224    2012-12-24    calendar date
//! 2012359     2012-359      ordinal date
//! 2012W521    2012-W52-1    week date
//! 2012Q485    2012-Q4-85    quarter date
//! ```
//!
//! Any of them may carry a leading `+` before the year.

use crate::consts::{DATE_SEPARATOR, QUARTER_DESIGNATOR, WEEK_DESIGNATOR, YEAR_SIGN};
use crate::error::{ParseError, UnexpectedTokenError};
use crate::types::{CalendarDate, OrdinalDate, QuarterDate, WeekDate};
use crate::IsoDate;

/// Shortest input that can follow a 4-digit year opener.
const MIN_YEAR_FIRST_LEN: usize = 8;

/// Parses a complete date string.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the input does not match a
/// supported grammar or has trailing characters, and `ParseError::Range`
/// if it is well formed but names a date that does not exist.
pub fn parse_date(input: &str) -> Result<IsoDate, ParseError> {
    parse_date_bytes(input.as_bytes())
}

/// Like [`parse_date`], for input that has not been checked as UTF-8.
///
/// Every accepted date is ASCII; invalid UTF-8 only ever shows up in error
/// tokens, where it is replaced with U+FFFD.
///
/// # Errors
/// Same as [`parse_date`].
pub fn parse_date_bytes(input: &[u8]) -> Result<IsoDate, ParseError> {
    let (consumed, date) = parse_date_bytes_prefix(input)?;
    if consumed != input.len() {
        let err = UnexpectedTokenError::new(text(input), text(&input[consumed..]), text(&input[..consumed]), "end of input");
        tracing::debug!(error = %err, "trailing characters after date");
        return Err(err.into());
    }
    Ok(date)
}

/// Parses a date at the start of `input`, returning it with the number of
/// characters it spans (including a leading `+`).
///
/// # Errors
/// Same as [`parse_date`], except that trailing characters are allowed.
pub fn parse_date_prefix(input: &str) -> Result<(usize, IsoDate), ParseError> {
    parse_date_bytes_prefix(input.as_bytes())
}

/// Byte-input counterpart of [`parse_date_prefix`]; the count is in bytes,
/// which equals characters for any accepted date.
///
/// # Errors
/// Same as [`parse_date_prefix`].
#[tracing::instrument(level = "trace", skip(input), fields(input_len = input.len()))]
pub fn parse_date_bytes_prefix(input: &[u8]) -> Result<(usize, IsoDate), ParseError> {
    let (signed, bytes) = input
        .strip_prefix(&[YEAR_SIGN])
        .map_or((0, input), |rest| (1, rest));

    let grammar = Grammar { value: input, bytes };
    match grammar.dispatch() {
        Ok((format, consumed, date)) => {
            tracing::trace!(format, consumed = consumed + signed, "matched date grammar");
            Ok((consumed + signed, date))
        },
        Err(err) => {
            tracing::debug!(error = %err, "rejected date");
            Err(err)
        },
    }
}

type Matched = (&'static str, usize, IsoDate);

struct Grammar<'i> {
    /// Full input, sign included.
    value: &'i [u8],
    /// Input after the optional sign.
    bytes: &'i [u8],
}

impl Grammar<'_> {
    fn dispatch(&self) -> Result<Matched, ParseError> {
        match self.count_digits(0) {
            4 => self.year_first(),
            7 => {
                let date = OrdinalDate::new(self.number(0, 4), self.number(4, 3))?;
                Ok(("basic ordinal", 7, date.into()))
            },
            8 => {
                let date = CalendarDate::new(self.number(0, 4), self.small(4, 2), self.small(6, 2))?;
                Ok(("basic calendar", 8, date.into()))
            },
            n => Err(self.unexpected(humanize_digits(n), "", "date format")),
        }
    }

    /// `YYYY` followed by a designator or separator.
    fn year_first(&self) -> Result<Matched, ParseError> {
        let year_text = text(&self.bytes[..4]);
        let year = self.number(0, 4);
        if self.bytes.len() < MIN_YEAR_FIRST_LEN {
            return Err(self.unexpected(text(&self.bytes[4..]), year_text, "8 or more characters"));
        }

        let n = self.count_digits(5);
        match self.bytes[4] {
            QUARTER_DESIGNATOR => {
                self.expect_digits(n, 3, "Q")?;
                let date = QuarterDate::new(year, self.small(5, 1), self.small(6, 2))?;
                Ok(("basic quarter", 8, date.into()))
            },
            WEEK_DESIGNATOR => {
                self.expect_digits(n, 3, "W")?;
                let date = WeekDate::new(year, self.small(5, 2), self.small(7, 1))?;
                Ok(("basic week", 8, date.into()))
            },
            DATE_SEPARATOR => self.extended(&year_text, year, n),
            _ => Err(self.unexpected(text(&self.bytes[4..]), year_text, "- or Q or W")),
        }
    }

    /// `YYYY-` followed by a run of `n` digits.
    fn extended(&self, year_text: &str, year: u16, n: usize) -> Result<Matched, ParseError> {
        match n {
            2 => {
                let month = self.small(5, 2);
                self.expect_separator(7, format!("-{month:02}"))?;
                self.expect_digits(self.count_digits(8), 2, format!("-{month:02}-"))?;
                let date = CalendarDate::new(year, month, self.small(8, 2))?;
                Ok(("extended calendar", 10, date.into()))
            },
            3 => {
                let date = OrdinalDate::new(year, self.number(5, 3))?;
                Ok(("extended ordinal", 8, date.into()))
            },
            0 if self.bytes[5] == QUARTER_DESIGNATOR => {
                self.expect_digits(self.count_digits(6), 1, "Q")?;
                let quarter = self.small(6, 1);
                self.expect_separator(7, format!("Q{quarter}"))?;
                self.expect_digits(self.count_digits(8), 2, format!("Q{quarter}-"))?;
                let date = QuarterDate::new(year, quarter, self.small(8, 2))?;
                Ok(("extended quarter", 10, date.into()))
            },
            0 if self.bytes[5] == WEEK_DESIGNATOR => {
                self.expect_digits(self.count_digits(6), 2, "W")?;
                let week = self.small(6, 2);
                self.expect_separator(8, format!("W{week:02}"))?;
                self.expect_digits(self.count_digits(9), 1, format!("W{week:02}-"))?;
                let date = WeekDate::new(year, week, self.small(9, 1))?;
                Ok(("extended week", 10, date.into()))
            },
            _ => Err(self.unexpected(
                humanize_digits(n),
                format!("{year_text}-"),
                "like -Q4-85 or -W52-1 or -359",
            )),
        }
    }

    fn expect_digits(&self, found: usize, want: usize, after: impl Into<String>) -> Result<(), ParseError> {
        if found == want {
            Ok(())
        } else {
            Err(self.unexpected(humanize_digits(found), after, humanize_digits(want)))
        }
    }

    fn expect_separator(&self, at: usize, after: impl Into<String>) -> Result<(), ParseError> {
        if self.bytes.get(at) == Some(&DATE_SEPARATOR) {
            Ok(())
        } else {
            // Everything before `at` is ASCII, so a character starts there.
            let rest = self.bytes.get(at..).unwrap_or_default();
            let token = text(rest).chars().next().map(String::from).unwrap_or_default();
            Err(self.unexpected(token, after, "-"))
        }
    }

    fn unexpected(&self, token: impl Into<String>, after: impl Into<String>, expected: impl Into<String>) -> ParseError {
        UnexpectedTokenError::new(text(self.value), token, after, expected).into()
    }

    /// Length of the ASCII digit run starting at `at`.
    fn count_digits(&self, at: usize) -> usize {
        self.bytes
            .get(at..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    }

    /// Decimal value of `width` digits starting at `at`; the caller has
    /// already counted them.
    fn number(&self, at: usize, width: usize) -> u16 {
        self.bytes[at..at + width]
            .iter()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// Like [`number`](Self::number) for fields of at most two digits.
    fn small(&self, at: usize, width: usize) -> u8 {
        debug_assert!(width <= 2);
        self.number(at, width) as u8
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn humanize_digits(n: usize) -> String {
    if n <= 1 {
        format!("{n}-digit")
    } else {
        format!("{n}-digits")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateElement, RangeError};

    fn calendar(year: u16, month: u8, day: u8) -> IsoDate {
        CalendarDate::new(year, month, day).unwrap().into()
    }

    fn ordinal(year: u16, day: u16) -> IsoDate {
        OrdinalDate::new(year, day).unwrap().into()
    }

    fn week(year: u16, week: u8, day: u8) -> IsoDate {
        WeekDate::new(year, week, day).unwrap().into()
    }

    fn quarter(year: u16, quarter: u8, day: u8) -> IsoDate {
        QuarterDate::new(year, quarter, day).unwrap().into()
    }

    fn token_error(value: &str, token: &str, after_token: &str, expected: &str) -> ParseError {
        UnexpectedTokenError::new(value, token, after_token, expected).into()
    }

    fn range_error(element: DateElement, value: u16, year: u16, max: u16) -> ParseError {
        RangeError {
            element,
            value,
            year,
            min: 1,
            max,
        }
        .into()
    }

    #[test_log::test]
    fn test_parse_valid_dates() {
        let cases = [
            ("20121224", calendar(2012, 12, 24)),
            ("+20121224", calendar(2012, 12, 24)),
            ("00001224", calendar(0, 12, 24)),
            ("2012359", ordinal(2012, 359)),
            ("+2012359", ordinal(2012, 359)),
            ("2012W521", week(2012, 52, 1)),
            ("+2012W521", week(2012, 52, 1)),
            ("2012Q485", quarter(2012, 4, 85)),
            ("+2012Q485", quarter(2012, 4, 85)),
            ("2012-12-24", calendar(2012, 12, 24)),
            ("+2012-12-24", calendar(2012, 12, 24)),
            ("0000-12-24", calendar(0, 12, 24)),
            ("+0000-12-24", calendar(0, 12, 24)),
            ("2012-359", ordinal(2012, 359)),
            ("+2012-359", ordinal(2012, 359)),
            ("0000-366", ordinal(0, 366)),
            ("2012-W52-1", week(2012, 52, 1)),
            ("0000-W52-1", week(0, 52, 1)),
            ("2012-Q4-85", quarter(2012, 4, 85)),
            ("0000-Q4-85", quarter(0, 4, 85)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_date(input), Ok(expected), "{input}");
        }
    }

    #[test_log::test]
    fn test_parse_syntax_errors() {
        let cases = [
            ("20", "2-digits", "", "date format"),
            ("", "0-digit", "", "date format"),
            ("+", "0-digit", "", "date format"),
            ("12345", "5-digits", "", "date format"),
            ("2000/", "/", "2000", "8 or more characters"),
            ("2000Q1", "Q1", "2000", "8 or more characters"),
            ("2000Q12", "Q12", "2000", "8 or more characters"),
            ("2000W1", "W1", "2000", "8 or more characters"),
            ("2000W12", "W12", "2000", "8 or more characters"),
            ("2000X1234", "X1234", "2000", "- or Q or W"),
            ("2000q1234", "q1234", "2000", "- or Q or W"),
            ("2000Q1234", "4-digits", "Q", "3-digits"),
            ("2000W1234", "4-digits", "W", "3-digits"),
            ("2000-Q12-34", "2-digits", "Q", "1-digit"),
            ("2000-Q1=34", "=", "Q1", "-"),
            ("2000-Q1-123", "3-digits", "Q1-", "2-digits"),
            ("2000-W123-34", "3-digits", "W", "2-digits"),
            ("2000-W1-234", "1-digit", "W", "2-digits"),
            ("2000-W12=34", "=", "W12", "-"),
            ("2000-W12-34", "2-digits", "W12-", "1-digit"),
            ("2000-W12", "", "W12", "-"),
            ("2000-12~34", "~", "-12", "-"),
            ("2000-12-345", "3-digits", "-12-", "2-digits"),
            ("2000-12-", "0-digit", "-12-", "2-digits"),
            ("2000-12345", "5-digits", "2000-", "like -Q4-85 or -W52-1 or -359"),
            ("2000-X12-3", "0-digit", "2000-", "like -Q4-85 or -W52-1 or -359"),
        ];

        for (input, token, after_token, expected) in cases {
            assert_eq!(
                parse_date(input),
                Err(token_error(input, token, after_token, expected)),
                "{input}"
            );
        }
    }

    #[test_log::test]
    fn test_parse_range_errors() {
        let cases = [
            ("20121324", range_error(DateElement::Month, 13, 2012, 12)),
            ("20110229", range_error(DateElement::DayOfMonth, 29, 2011, 28)),
            ("20120230", range_error(DateElement::DayOfMonth, 30, 2012, 29)),
            ("2012367", range_error(DateElement::DayOfYear, 367, 2012, 366)),
            ("2013366", range_error(DateElement::DayOfYear, 366, 2013, 365)),
            ("2012W018", range_error(DateElement::DayOfWeek, 8, 2012, 7)),
            ("2012W010", range_error(DateElement::DayOfWeek, 0, 2012, 7)),
            ("2012W532", range_error(DateElement::Week, 53, 2012, 52)),
            ("2012Q585", range_error(DateElement::Quarter, 5, 2012, 4)),
            ("2012Q192", range_error(DateElement::DayOfQuarter, 92, 2012, 91)),
            ("2013Q191", range_error(DateElement::DayOfQuarter, 91, 2013, 90)),
            ("2012-00-10", range_error(DateElement::Month, 0, 2012, 12)),
            ("9999-W52-6", range_error(DateElement::DayOfWeek, 6, 9999, 5)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_date(input), Err(expected), "{input}");
        }
    }

    #[test_log::test]
    fn test_trailing_characters_are_rejected() {
        assert_eq!(
            parse_date("20121224Hello"),
            Err(token_error("20121224Hello", "Hello", "20121224", "end of input"))
        );
        assert_eq!(
            parse_date("+0000-366Hello"),
            Err(token_error("+0000-366Hello", "Hello", "+0000-366", "end of input"))
        );
    }

    #[test_log::test]
    fn test_parse_date_prefix_reports_consumed() {
        let cases = [
            ("2012-359", 8),
            ("+2012-359", 9),
            ("2012359T10", 7),
            ("20121224T10:00", 8),
            ("2012-12-24T10:00", 10),
            ("+2012-W52-1 ", 11),
            ("2012Q485Z", 8),
        ];
        for (input, consumed) in cases {
            let (n, _) = parse_date_prefix(input).unwrap();
            assert_eq!(n, consumed, "{input}");
        }
    }

    #[test_log::test]
    fn test_non_ascii_input() {
        assert_eq!(
            parse_date("2000é1234"),
            Err(token_error("2000é1234", "é1234", "2000", "- or Q or W"))
        );
        assert_eq!(
            parse_date("2000-12é34"),
            Err(token_error("2000-12é34", "é", "-12", "-"))
        );
        assert_eq!(
            parse_date("2012-12-24日"),
            Err(token_error("2012-12-24日", "日", "2012-12-24", "end of input"))
        );
        assert!(parse_date("２０１２-12-24").is_err());
    }

    #[test_log::test]
    fn test_parse_date_bytes() {
        assert_eq!(parse_date_bytes(b"2012-W52-1"), Ok(week(2012, 52, 1)));
        assert_eq!(parse_date_bytes(b"+2012Q485"), Ok(quarter(2012, 4, 85)));
        assert_eq!(parse_date_bytes_prefix(b"2012359\xff"), Ok((7, ordinal(2012, 359))));

        assert_eq!(
            parse_date_bytes(b"20121224\xffZ"),
            Err(token_error("20121224\u{fffd}Z", "\u{fffd}Z", "20121224", "end of input"))
        );
        assert_eq!(
            parse_date_bytes(b"2000-12\xff34"),
            Err(token_error("2000-12\u{fffd}34", "\u{fffd}", "-12", "-"))
        );
        assert_eq!(
            parse_date_bytes(b"2012-13-01"),
            Err(range_error(DateElement::Month, 13, 2012, 12))
        );
    }

    #[test_log::test]
    fn test_str_and_bytes_agree() {
        for input in ["20121224", "2000-Q1=34", "2012W532", "+0000-366Hello", "2000é1234", ""] {
            assert_eq!(parse_date(input), parse_date_bytes(input.as_bytes()), "{input}");
        }
    }

    #[test]
    fn test_humanize_digits() {
        assert_eq!(humanize_digits(0), "0-digit");
        assert_eq!(humanize_digits(1), "1-digit");
        assert_eq!(humanize_digits(2), "2-digits");
    }
}
