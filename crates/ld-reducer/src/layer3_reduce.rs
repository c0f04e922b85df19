//! Layer 3: Group + reduce — one representative line per normalized key.

use crate::layer2_normalize::normalize;
use ld_core::types::LogLine;
use std::collections::HashMap;

/// All occurrences of one normalized message, in input order.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub key: String,
    pub occurrences: Vec<&'a LogLine>,
}

impl<'a> Group<'a> {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    /// Occurrence with the greatest timestamp string; first one wins on ties.
    pub fn latest(&self) -> Option<&'a LogLine> {
        self.occurrences.iter().copied().reduce(|best, line| {
            if line.timestamp_raw > best.timestamp_raw { line } else { best }
        })
    }

    /// `None` only for a group with no occurrences.
    pub fn reduce(&self) -> Option<ReducedLine> {
        Some(ReducedLine {
            text: self.latest()?.raw.clone(),
            count: self.count(),
        })
    }
}

/// Rendered representative of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedLine {
    pub text: String,
    pub count: usize,
}

impl ReducedLine {
    pub fn render(&self) -> String {
        if self.count > 1 {
            format!("[{}x] {}", self.count, self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Group by normalized message. Groups come back in first-seen key order.
pub fn group_lines(lines: &[LogLine]) -> Vec<Group<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();
    for line in lines {
        let key = normalize(&line.message);
        let existing = index.get(&*key).copied();
        match existing {
            Some(i) => groups[i].occurrences.push(line),
            None => {
                let key = key.into_owned();
                index.insert(key.clone(), groups.len());
                groups.push(Group { key, occurrences: vec![line] });
            }
        }
    }
    groups
}

/// Representatives of the first `max_lines` groups.
pub fn reduce_groups(groups: &[Group<'_>], max_lines: usize) -> Vec<ReducedLine> {
    groups
        .iter()
        .take(max_lines)
        .filter_map(Group::reduce)
        .collect()
}

/// One rendered line per reduced group.
pub fn render(reduced: &[ReducedLine]) -> String {
    reduced
        .iter()
        .map(ReducedLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn reduce_lines(lines: &[LogLine], max_lines: usize) -> Vec<ReducedLine> {
    reduce_groups(&group_lines(lines), max_lines)
}

pub fn reduce(lines: &[LogLine], max_lines: usize) -> String {
    render(&reduce_lines(lines, max_lines))
}
