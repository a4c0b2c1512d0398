use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The instant a message is due. Inputs without an offset are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTime(DateTime<Utc>);

// Four-digit years only: fits RFC 3339 output and PostgreSQL's TIMESTAMPTZ.
const YEARS: RangeInclusive<i32> = 1..=9999;

impl ScheduledTime {
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid scheduledTime: cannot be empty.".to_string());
        }

        let instant = Self::parse_instant(trimmed).ok_or_else(|| {
            format!("Invalid scheduledTime: `{trimmed}` is not a valid date-time.")
        })?;

        if !YEARS.contains(&instant.year()) {
            return Err(format!(
                "Invalid scheduledTime: year must be between {} and {}.",
                YEARS.start(),
                YEARS.end()
            ));
        }

        Ok(Self(instant))
    }

    fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Some(instant.with_timezone(&Utc));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}
