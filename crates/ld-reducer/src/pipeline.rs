//! Reduction pipeline — orchestrates parse, reduce and time range recovery.

use crate::lines::split_lines;
use crate::{layer1_parse, layer3_reduce, time_range};
use chrono::NaiveDateTime;
use ld_core::config::ReducerConfig;
use ld_core::types::{Severity, TimeRange};
use serde::Serialize;
use tracing::debug;

/// Counters gathered along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestStats {
    pub input_lines: usize,
    pub parsed_lines: usize,
    pub retained_lines: usize,
    pub group_count: usize,
    pub emitted_lines: usize,
    pub truncated: bool,
}

/// Reduction result with statistics.
#[derive(Debug, Clone)]
pub struct DigestResult {
    pub output: String,
    pub time_range: Option<TimeRange>,
    pub stats: DigestStats,
}

impl DigestResult {
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// The main reducer pipeline.
#[derive(Debug, Clone)]
pub struct LogReducer {
    pub max_lines: usize,
    pub hours_back: u32,
    pub severities: Vec<Severity>,
}

impl LogReducer {
    pub fn new(config: &ReducerConfig) -> Self {
        Self {
            max_lines: config.max_lines,
            hours_back: config.hours_back,
            severities: config.severities.clone(),
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_hours_back(mut self, hours_back: u32) -> Self {
        self.hours_back = hours_back;
        self
    }

    pub fn with_severities(mut self, severities: Vec<Severity>) -> Self {
        self.severities = severities;
        self
    }

    pub fn cutoff(&self, reference_time: NaiveDateTime) -> NaiveDateTime {
        layer1_parse::cutoff_for(reference_time, self.hours_back)
    }

    /// Reduce raw log text against an explicit reference time.
    pub fn run(&self, raw_text: &str, reference_time: NaiveDateTime) -> DigestResult {
        let cutoff = self.cutoff(reference_time);
        let mut stats = DigestStats::default();

        let mut lines = Vec::new();
        for raw in split_lines(raw_text) {
            stats.input_lines += 1;
            let Some(line) = layer1_parse::parse_line(raw) else { continue };
            stats.parsed_lines += 1;
            if layer1_parse::retain(&line, &self.severities, cutoff) {
                lines.push(line);
            }
        }
        stats.retained_lines = lines.len();

        let groups = layer3_reduce::group_lines(&lines);
        stats.group_count = groups.len();
        stats.truncated = groups.len() > self.max_lines;

        let reduced = layer3_reduce::reduce_groups(&groups, self.max_lines);
        stats.emitted_lines = reduced.len();
        let output = layer3_reduce::render(&reduced);

        let time_range = time_range::extract_time_range(&output);

        debug!(
            input = stats.input_lines,
            parsed = stats.parsed_lines,
            retained = stats.retained_lines,
            groups = stats.group_count,
            emitted = stats.emitted_lines,
            %cutoff,
            "log reduced"
        );

        DigestResult { output, time_range, stats }
    }
}

impl Default for LogReducer {
    fn default() -> Self {
        Self::new(&ReducerConfig::default())
    }
}
