use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

/// Layout of the leading timestamp of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Display layout for time ranges (second precision).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log level as written by the producer (upper-case bare word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    Fatal,
}

impl Severity {
    /// Levels considered actionable when the caller does not override them.
    pub const ACTIONABLE: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Critical,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: `warning` is not `WARNING`.
impl FromStr for Severity {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            "FATAL" => Ok(Self::Fatal),
            other => Err(DigestError::UnknownSeverity(other.to_string())),
        }
    }
}

/// One structured log line that survived parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: NaiveDateTime,
    /// Timestamp exactly as it appeared in the source.
    pub timestamp_raw: String,
    pub severity: Severity,
    pub source: String,
    pub message: String,
    /// Whole source line, trimmed.
    pub raw: String,
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`], accepting one to six fractional digits.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (_, frac) = s.rsplit_once('.')?;
    if frac.is_empty() || frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let ts = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()?;
    // Leap-second encodings carry nanos >= 1s and have no textual equivalent here.
    if ts.nanosecond() >= 1_000_000_000 {
        return None;
    }
    // Calendar starts at year 1.
    if ts.year() < 1 {
        return None;
    }
    Some(ts)
}

/// Earliest and latest timestamps observed in a block of log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Human-readable window, or the fallback when nothing was recovered.
    pub fn describe(range: Option<&TimeRange>) -> String {
        match range {
            Some(r) => format!(
                "Analyzing logs from: {} to {}",
                r.start.format(DISPLAY_FORMAT),
                r.end.format(DISPLAY_FORMAT)
            ),
            None => "No valid timestamps found in filtered logs.".to_string(),
        }
    }
}
