//! Calendar-date handling shared by vaccines and doses.
//!
//! Dates are accepted as `YYYY-MM-DD`, stored as `YYYY-MM-DD` text and
//! written to clients as an ISO-8601 date-time at midnight.

use chrono::{NaiveDate, NaiveTime};

/// Input and storage format for every `dose_date`.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for every `dose_date` in responses.
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("expected YYYY-MM-DD")]
    Layout,
    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

/// Strict `YYYY-MM-DD`: zero-padded, no surrounding whitespace.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateParseError::Layout);
    }
    Ok(NaiveDate::parse_from_str(raw, CALENDAR_DATE_FORMAT)?)
}

pub fn to_iso_midnight(date: &NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format(ISO_DATETIME_FORMAT)
        .to_string()
}

/// Serde adapter: serializes as `YYYY-MM-DDT00:00:00`, accepts either that
/// or a bare `YYYY-MM-DD` on the way back in.
pub mod iso_midnight {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_iso_midnight(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, super::ISO_DATETIME_FORMAT)
            .map(|dt| dt.date())
            .or_else(|_| super::parse_calendar_date(&raw))
            .map_err(de::Error::custom)
    }
}
