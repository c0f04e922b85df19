//! Time range recovery over reduced (or any timestamp-prefixed) text.

use crate::lines::split_lines;
use ld_core::types::{parse_timestamp, TimeRange};
use regex::Regex;
use std::sync::LazyLock;

static RE_LEADING_TS: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"^(?:\[\d+x\] )?(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+)"
).unwrap());

/// Min/max leading timestamp over all lines; `None` when nothing parses.
pub fn extract_time_range(text: &str) -> Option<TimeRange> {
    let mut stamps = split_lines(text)
        .filter_map(|line| RE_LEADING_TS.captures(line))
        .filter_map(|caps| parse_timestamp(caps.get(1)?.as_str()));

    let first = stamps.next()?;
    let (start, end) = stamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
    Some(TimeRange::new(start, end))
}
