use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Lifecycle window of a posting. Jobs carry only an expiry; courses carry a
/// start and an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn expiry(end: DateTime<Utc>) -> Self {
        Self { start: None, end }
    }

    pub fn scheduled(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }

    /// Parse a window from backend timestamp strings. Malformed input is
    /// rejected here so status derivation stays total.
    pub fn parse(start: Option<&str>, end: &str) -> Result<Self, InvalidTimestamp> {
        let start = start.map(parse_instant).transpose()?;
        let end = parse_instant(end)?;
        Ok(Self { start, end })
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, InvalidTimestamp> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Raised when a backend timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable timestamp '{value}'")]
pub struct InvalidTimestamp {
    pub value: String,
}

/// Derived lifecycle state of a posting at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    CountdownDays(i64),
    LastDay,
    Active,
    Expired,
    Ended,
}

impl PostingStatus {
    /// Courses accept enrollment strictly before their start time.
    pub fn enrollment_open(self) -> bool {
        matches!(self, Self::CountdownDays(_) | Self::LastDay)
    }

    /// Jobs block new applications only once the expiry has passed.
    pub fn application_blocked(self) -> bool {
        matches!(self, Self::Expired | Self::Ended)
    }
}

impl fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountdownDays(days) => write!(f, "{days} days left"),
            Self::LastDay => write!(f, "Last day"),
            // "Starting" is the label the marketplace shows for a running
            // course.
            Self::Active => write!(f, "Starting"),
            Self::Expired => write!(f, "Expired"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

/// Derive a posting's status from wall-clock time. Pure; the window is never
/// mutated.
///
/// The job branch counts whole days down with floor while the course branch
/// counts days until start with ceil. The asymmetry is intentional: the two
/// countdowns reference different endpoints and both must keep parity with
/// the displayed text.
pub fn resolve_status(now: DateTime<Utc>, window: &TimeWindow) -> PostingStatus {
    match window.start {
        None => {
            let days = days_floor(window.end - now);
            if days > 0 {
                PostingStatus::CountdownDays(days)
            } else if days == 0 {
                PostingStatus::LastDay
            } else {
                PostingStatus::Expired
            }
        }
        Some(start) => {
            if now < start {
                PostingStatus::CountdownDays(days_ceil(start - now))
            } else if now <= window.end {
                PostingStatus::Active
            } else {
                PostingStatus::Ended
            }
        }
    }
}

fn days_floor(span: Duration) -> i64 {
    span.num_milliseconds().div_euclid(DAY_MILLIS)
}

fn days_ceil(span: Duration) -> i64 {
    -(-span.num_milliseconds()).div_euclid(DAY_MILLIS)
}
