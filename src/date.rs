//! Publication date parsing.
//!
//! Zotero stores dates as free text. [`parse_date`] reads the common shapes into a
//! calendar date without any time zone conversion: a zone-less input is taken as
//! written, and an input with an offset keeps the calendar date in that offset.
//! Partial dates (`2020`, `May 2020`, `2020-05`) resolve to the first day of the
//! period. Years must be written with at least three digits, except in the US
//! `M/D/YY` form, where `00`–`49` map to 2000–2049 and `50`–`99` to 1950–1999.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Date-time layouts tried before plain dates. The time part is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y", // US: 05/17/2020
    "%B %d, %Y", // May 17, 2020
    "%B %d %Y",
    "%d %B %Y", // 17 May 2020
    "%d %B, %Y",
    "%A, %B %d, %Y", // Sunday, May 17, 2020
];

/// Smallest year accepted from a format-table parse. Anything lower came from a
/// one- or two-digit year field that `%Y` accepted.
const MIN_YEAR: i32 = 100;

/// A calendar date with optional parts.
///
/// The all-absent value means the record carries no date at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedDate {
    pub year: Option<i32>,
    /// 1-based month
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl NormalizedDate {
    /// Returns `true` if no date part is present.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

impl From<NaiveDate> for NormalizedDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }
}

/// Parses a free-text date.
///
/// Returns `None` if the text is not a recognizable calendar date.
///
/// # Examples
///
/// ```
/// use zotero_record::date::{parse_date, NormalizedDate};
///
/// let date = parse_date("2020-05-17").unwrap();
/// assert_eq!(date, NormalizedDate { year: Some(2020), month: Some(5), day: Some(17) });
/// assert!(parse_date("not-a-date").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NormalizedDate> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    try_parse_with_offset(value)
        .or_else(|| try_parse_datetime(value))
        .or_else(|| try_parse_date(value))
        .or_else(|| try_parse_short_year(value))
        .or_else(|| try_parse_partial(value))
        .map(NormalizedDate::from)
}

fn try_parse_with_offset(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .map(|dt| dt.naive_local().date())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(value, fmt)
            .ok()
            .filter(has_full_year)
    })
}

/// US `M/D/YY` dates, with the two-digit year pivoting at 50.
fn try_parse_short_year(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || year.len() != 2 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let year = if year < 50 { 2000 + year } else { 1900 + year };
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Year-only and year-month inputs, completed to the first day.
fn try_parse_partial(value: &str) -> Option<NaiveDate> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("1 {value}"), "%d %B %Y"))
        .ok()
        .filter(has_full_year)
}

fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= MIN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ymd(year: i32, month: u32, day: u32) -> Option<NormalizedDate> {
        Some(NormalizedDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        })
    }

    #[rstest]
    #[case("2020-05-17", ymd(2020, 5, 17))]
    #[case("  2020-05-17  ", ymd(2020, 5, 17))]
    #[case("2020/05/17", ymd(2020, 5, 17))]
    #[case("05/17/2020", ymd(2020, 5, 17))]
    #[case("May 17, 2020", ymd(2020, 5, 17))]
    #[case("17 May 2020", ymd(2020, 5, 17))]
    #[case("May 17 2020", ymd(2020, 5, 17))]
    #[case("17 May, 2020", ymd(2020, 5, 17))]
    #[case("Sunday, May 17, 2020", ymd(2020, 5, 17))]
    #[case("5/17/20", ymd(2020, 5, 17))]
    #[case("5/17/49", ymd(2049, 5, 17))]
    #[case("5/17/75", ymd(1975, 5, 17))]
    #[case("2020-05-17T10:30:00", ymd(2020, 5, 17))]
    #[case("2020-05-17 10:30", ymd(2020, 5, 17))]
    #[case("2020-05-17T23:30:00-07:00", ymd(2020, 5, 17))]
    #[case("2020-05-17T00:30:00Z", ymd(2020, 5, 17))]
    #[case("Sun, 17 May 2020 10:00:00 +0000", ymd(2020, 5, 17))]
    #[case("2020-05", ymd(2020, 5, 1))]
    #[case("May 2020", ymd(2020, 5, 1))]
    #[case("2020", ymd(2020, 1, 1))]
    fn test_parse_date(#[case] input: &str, #[case] expected: Option<NormalizedDate>) {
        assert_eq!(parse_date(input), expected);
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("")]
    #[case("   ")]
    #[case("2020-13-01")]
    #[case("2021-02-30")]
    #[case("Spring 2020")]
    #[case("20-05")]
    #[case("5/17/2")]
    #[case("13/17/20")]
    fn test_parse_date_invalid(#[case] input: &str) {
        assert_eq!(parse_date(input), None);
    }

    #[test]
    fn test_empty_date() {
        assert!(NormalizedDate::default().is_empty());
        assert!(!ymd(2020, 1, 1).unwrap().is_empty());
    }
}
