use super::settings::{DateFieldType, GroupField};
use crate::library::dates::{parse_date, parse_date_precision, year_string, DatePrecision};
use crate::library::Album;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Bucket key for albums without a usable date. Always sorts last.
pub const UNKNOWN_KEY: &str = "unknown";
pub const UNKNOWN_HEADER: &str = "Unknown";

/// Placeholder buckets for empty text fields. Sorted last like `UNKNOWN_KEY`.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_GENRE: &str = "Unknown Genre";
pub const UNKNOWN_LABEL: &str = "Unknown Label";

/// Keys that always sort after their siblings
pub fn is_unknown_key(key: &str) -> bool {
    matches!(key, UNKNOWN_KEY | UNKNOWN_ARTIST | UNKNOWN_GENRE | UNKNOWN_LABEL)
}

/// Everything key derivation needs besides the album itself
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    pub date_field: DateFieldType,
    /// Local wall-clock "now" for the relative added-at buckets
    pub now: NaiveDateTime,
}

/// (sortable key, display header) of `album` for one grouping level
pub fn group_key_and_header(album: &Album, field: GroupField, ctx: &KeyContext) -> (String, String) {
    match field {
        GroupField::Artist => text_key(&album.artist, UNKNOWN_ARTIST),
        GroupField::Genre => text_key(&album.genre, UNKNOWN_GENRE),
        GroupField::Label => text_key(&album.label, UNKNOWN_LABEL),
        GroupField::Year => match resolve_date(album, ctx.date_field) {
            Some((date, _)) => {
                let year = year_string(date);
                (year.clone(), year)
            }
            None => unknown(),
        },
        GroupField::Month => match resolve_date(album, ctx.date_field) {
            Some((date, DatePrecision::Year)) => year_passthrough(date),
            Some((date, _)) => (
                format!("{}-{:02}", year_string(date), date.month()),
                date.format("%B %Y").to_string(),
            ),
            None => unknown(),
        },
        GroupField::Week => match resolve_date(album, ctx.date_field) {
            Some((date, DatePrecision::Year)) => year_passthrough(date),
            Some((date, _)) => {
                let week = date.iso_week();
                (
                    format!("{:04}-W{:02}", week.year(), week.week()),
                    week_header(date),
                )
            }
            None => unknown(),
        },
        GroupField::AddedAt => added_bucket(album.added_local().date(), ctx.now.date()),
    }
}

fn text_key(value: &str, placeholder: &str) -> (String, String) {
    let value = value.trim();
    if value.is_empty() {
        (placeholder.to_string(), placeholder.to_string())
    } else {
        (value.to_string(), value.to_string())
    }
}

fn unknown() -> (String, String) {
    (UNKNOWN_KEY.to_string(), UNKNOWN_HEADER.to_string())
}

fn year_passthrough(date: NaiveDate) -> (String, String) {
    let year = year_string(date);
    (year.clone(), year)
}

/// Date used for Year/Month/Week grouping, with its precision.
/// Added-at timestamps always have day precision.
fn resolve_date(album: &Album, date_field: DateFieldType) -> Option<(NaiveDate, DatePrecision)> {
    let raw = match date_field {
        DateFieldType::Added => return Some((album.added_local().date(), DatePrecision::Day)),
        DateFieldType::Best => album.best_date(),
        DateFieldType::Original => &album.original_date,
        DateFieldType::Release => &album.release_date,
    };

    match parse_date_precision(raw) {
        DatePrecision::None => None,
        precision => parse_date(raw).ok().map(|date| (date, precision)),
    }
}

/// First day (Monday) of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// "Dec 9 - Dec 15, 2024", or "Dec 30, 2024 - Jan 5, 2025" across a year end
pub fn week_header(date: NaiveDate) -> String {
    let start = week_start(date);
    let end = start + Duration::days(6);
    if start.year() == end.year() {
        format!(
            "{} - {}, {}",
            start.format("%b %-d"),
            end.format("%b %-d"),
            year_string(end)
        )
    } else {
        format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Prefix of the catch-all "{Month Year}" added-at buckets
pub const OLDER_PREFIX: &str = "5-";

/// Relative recency bucket. The numeric prefixes make ascending key order
/// read newest first; older months share the "5-" prefix and are ordered
/// newest first by the group sorter.
pub fn added_bucket(added: NaiveDate, today: NaiveDate) -> (String, String) {
    let this_week = week_start(today);
    let last_week = this_week - Duration::days(7);
    let this_month = first_of_month(today);
    let last_month = first_of_previous_month(today);

    let (key, header) = if added >= today {
        ("0-today", "Today")
    } else if added >= this_week {
        ("1-this-week", "This Week")
    } else if added >= last_week {
        ("2-last-week", "Last Week")
    } else if added >= this_month {
        ("3-this-month", "This Month")
    } else if added >= last_month {
        ("4-last-month", "Last Month")
    } else {
        return (
            format!("{}{}-{:02}", OLDER_PREFIX, year_string(added), added.month()),
            added.format("%B %Y").to_string(),
        );
    };
    (key.to_string(), header.to_string())
}
