//! # Temporal Types — UTC-Only Timestamps and Date Math
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision, and the date arithmetic the console derives its overdue /
//! due-soon / duration indicators from.
//!
//! ## Boundary Contract
//!
//! Dates cross the process boundary as ISO-8601 strings. They are parsed
//! here, at the edge, and the rest of the core operates on `Timestamp`
//! values. An unparsable or missing date surfaces as [`DateError`] — it is
//! never treated as "now". The one default-fill in the system (finding
//! close dates) is a lifecycle rule in `grc-state`, not a parse fallback.
//!
//! ## Day Counting
//!
//! [`days_between`] is a ceiling-rounded signed day count. Any fraction of
//! a day remaining rounds up to a whole day, so a due date later today
//! reports 1 day remaining, and a record is overdue only once its due date
//! is in the past by the day boundary. All day math is integer arithmetic.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Days ahead within which a due date counts as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

const DAY_SECS: i64 = 86_400;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — from an RFC 3339 string with any offset.
/// - [`Timestamp::parse_date()`] — from a date-only string, midnight UTC.
/// - [`Timestamp::parse_iso8601()`] — boundary parser accepting all of the above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted, so every stored timestamp renders back to the exact string
    /// it arrived as.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Invalid`] if the string is not valid RFC 3339
    /// or uses a non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        if !s.ends_with('Z') {
            return Err(DateError::Invalid {
                input: s.to_string(),
                reason: "timestamp must use Z suffix (UTC only)".to_string(),
            });
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| DateError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// Lenient parser for ingesting external data; the result is always
    /// UTC with seconds precision.
    pub fn parse_lenient(s: &str) -> Result<Self, DateError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| DateError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a date-only string (`YYYY-MM-DD`) as midnight UTC.
    ///
    /// The console's date pickers emit date-only strings for due dates and
    /// review dates; they land here.
    pub fn parse_date(s: &str) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| DateError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let dt = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DateError::Invalid {
                input: s.to_string(),
                reason: "date has no midnight".to_string(),
            })?
            .and_utc();
        Ok(Self(dt))
    }

    /// Boundary parser: accept a full RFC 3339 timestamp (any offset) or a
    /// date-only string.
    ///
    /// This is the single entry point the presentation layer's ISO-8601
    /// strings flow through.
    pub fn parse_iso8601(s: &str) -> Result<Self, DateError> {
        if s.len() == 10 && !s.contains('T') {
            return Self::parse_date(s);
        }
        Self::parse_lenient(s)
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Day Math ────────────────────────────────────────────────────────

/// Ceiling-rounded signed day count from `from` to `to`.
///
/// Positive when `to` is in the future of `from`, negative when in the
/// past, zero when equal. Any fraction of a day rounds away from zero for
/// future dates and toward zero for past ones, which is what the ceiling
/// of the signed quotient does:
///
/// - `to` 1 second after `from` → 1 day
/// - `to` 1 second before `from` → 0 days
/// - `to` exactly 24h before `from` → -1 day
pub fn days_between(from: Timestamp, to: Timestamp) -> i64 {
    let secs = to.epoch_secs() - from.epoch_secs();
    if secs >= 0 {
        (secs + DAY_SECS - 1) / DAY_SECS
    } else {
        // ceil of a negative quotient: truncating division already rounds
        // toward zero, which is up.
        secs / DAY_SECS
    }
}

/// Whether `due` is strictly in the past of `now`, at day granularity.
///
/// A due date equal to `now` — or later today — is not overdue.
pub fn is_overdue_at(due: Timestamp, now: Timestamp) -> bool {
    days_between(now, due) < 0
}

/// Whether `due` is strictly in the past, at day granularity, as of now.
pub fn is_overdue(due: Timestamp) -> bool {
    is_overdue_at(due, Timestamp::now())
}

/// Whether `due` falls within `window_days` of `now` (and is not past).
pub fn is_due_soon_within(due: Timestamp, now: Timestamp, window_days: i64) -> bool {
    let days = days_between(now, due);
    (0..=window_days).contains(&days)
}

/// Whether `due` falls within the standard window of `now`.
pub fn is_due_soon_at(due: Timestamp, now: Timestamp) -> bool {
    is_due_soon_within(due, now, DUE_SOON_WINDOW_DAYS)
}

/// Whether `due` falls within the standard window, as of now.
pub fn is_due_soon(due: Timestamp) -> bool {
    is_due_soon_at(due, Timestamp::now())
}

// ─── Duration Formatting ─────────────────────────────────────────────

/// Format a day count for display, in calendar-approximate units.
///
/// Below 30 days the count is rendered in days; below a year in 30-day
/// months; above that in 365.25-day years with a month remainder. The
/// output grows monotonically with the magnitude of `days`; sign is
/// dropped (tenure and countdown displays both format magnitudes).
pub fn format_duration(days: i64) -> String {
    let d = days.abs();
    if d < 30 {
        return plural(d, "day");
    }
    if d < 366 {
        return plural(d / 30, "month");
    }
    // 365.25-day years via quarter-day integer math.
    let mut years = (d * 4) / 1461;
    let remainder_days = d - (years * 1461) / 4;
    let mut months = remainder_days / 30;
    // A remainder of nearly a whole year reads as the next year, not as
    // "12 months".
    if months >= 12 {
        years += 1;
        months -= 12;
    }
    if months == 0 {
        plural(years, "year")
    } else {
        format!("{} {}", plural(years, "year"), plural(months, "month"))
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
