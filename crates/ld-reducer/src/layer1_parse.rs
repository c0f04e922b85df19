//! Layer 1: Parse + filter — structured line matching, severity and recency cutoff.

use crate::lines::{split_lines, trim_line};
use chrono::{Duration, NaiveDateTime};
use ld_core::types::{parse_timestamp, LogLine, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// `<timestamp> <LEVEL> (<thread>) [<source>] <message>`
static RE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+)\s+(\w+)\s+\([^)]+\)\s+\[([^\]]+)\]\s+(.*)$"
).unwrap());

/// Parse a single line. `None` for anything not in the fixed shape.
pub fn parse_line(line: &str) -> Option<LogLine> {
    let caps = RE_LINE.captures(line)?;
    let timestamp_raw = caps.get(1)?.as_str();
    let timestamp = parse_timestamp(timestamp_raw)?;
    let severity = caps.get(2)?.as_str().parse::<Severity>().ok()?;
    Some(LogLine {
        timestamp,
        timestamp_raw: timestamp_raw.to_string(),
        severity,
        source: caps.get(3)?.as_str().to_string(),
        message: caps.get(4)?.as_str().to_string(),
        raw: trim_line(line).to_string(),
    })
}

/// Earliest timestamp still inside the window.
pub fn cutoff_for(reference_time: NaiveDateTime, hours_back: u32) -> NaiveDateTime {
    reference_time
        .checked_sub_signed(Duration::hours(i64::from(hours_back)))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Whether a parsed line passes the severity set and the inclusive cutoff.
pub fn retain(line: &LogLine, severities: &[Severity], cutoff: NaiveDateTime) -> bool {
    severities.contains(&line.severity) && line.timestamp >= cutoff
}

/// Parse every line of `raw_text` and keep those that pass [`retain`].
pub fn parse_and_filter(
    raw_text: &str,
    severities: &[Severity],
    cutoff: NaiveDateTime,
) -> Vec<LogLine> {
    split_lines(raw_text)
        .filter_map(parse_line)
        .filter(|l| retain(l, severities, cutoff))
        .collect()
}
