use crate::errors::MissionError;
use chrono::{Datelike, Duration, NaiveDate};

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` key. Anything else is rejected rather than coerced.
pub fn parse_day_key(raw: &str) -> Result<NaiveDate, MissionError> {
    if raw.len() != 10 {
        return Err(MissionError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| MissionError::InvalidDate(raw.to_string()))
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn week_label(start: NaiveDate) -> String {
    format!("{} ~ {}", day_key(start), day_key(start + Duration::days(6)))
}

pub fn month_label(start: NaiveDate) -> String {
    start.format("%Y-%m").to_string()
}
