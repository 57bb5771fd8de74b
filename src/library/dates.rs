use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// How much of a date string is actually known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DatePrecision {
    None,
    Year,
    Month,
    Day,
}

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("date string is empty")]
    Empty,
    #[error("unrecognised date: {0:?}")]
    Invalid(String),
}

/// Tag dates come in as "2024", "2024-12" or "2024-12-09" (sometimes with a
/// time suffix). Anything else counts as unknown.
pub fn parse_date_precision(s: &str) -> DatePrecision {
    match parse_with_precision(s) {
        Ok((_, precision)) => precision,
        Err(_) => DatePrecision::None,
    }
}

/// Parse a variable-precision date. Missing month/day default to 1.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    parse_with_precision(s).map(|(date, _)| date)
}

fn parse_with_precision(s: &str) -> Result<(NaiveDate, DatePrecision), DateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DateError::Empty);
    }

    // Timestamps like "2024-12-09T10:00:00Z" only contribute their date part
    let head = s.get(..10).unwrap_or(s);
    if let Ok(date) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        return Ok((date, DatePrecision::Day));
    }

    let head = s.get(..7).unwrap_or(s);
    if head.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", head), "%Y-%m-%d") {
            return Ok((date, DatePrecision::Month));
        }
    }

    let head = s.get(..4).unwrap_or(s);
    if head.len() == 4 && head.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(year) = head.parse::<i32>() {
            if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
                return Ok((date, DatePrecision::Year));
            }
        }
    }

    Err(DateError::Invalid(s.to_string()))
}

/// Four-digit year label ("0999" stays padded so keys keep sorting as strings).
pub fn year_string(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}
