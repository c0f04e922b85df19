//! Layer 2: Normalize — collapse dynamic tokens so near-duplicates share a key.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static RE_CUSTOM_INTEGRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"custom integration \w+").unwrap());

pub const CUSTOM_INTEGRATION_PLACEHOLDER: &str = "custom integration ...";

/// Grouping key for a message. Case-sensitive; borrows when nothing matches.
pub fn normalize(message: &str) -> Cow<'_, str> {
    RE_CUSTOM_INTEGRATION.replace_all(message, CUSTOM_INTEGRATION_PLACEHOLDER)
}
