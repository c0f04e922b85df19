//! Log reducer — turns a raw Home Assistant log into a short digest.
//!
//! Layers:
//! 1. Parse + filter (fixed line shape, severity set, recency cutoff)
//! 2. Normalize (collapse `custom integration <name>` tokens)
//! 3. Group + reduce (one counted representative per key, first-seen order)
//!
//! [`time_range`] recovers the covered window from the rendered digest, and
//! [`prompt`] wraps it into a summarization request.

pub mod layer1_parse;
pub mod layer2_normalize;
pub mod layer3_reduce;
pub mod lines;
pub mod pipeline;
pub mod prompt;
pub mod time_range;

pub use layer1_parse::{cutoff_for, parse_and_filter, parse_line};
pub use layer3_reduce::reduce;
pub use pipeline::{DigestResult, DigestStats, LogReducer};
pub use prompt::{generate_prompt, SummaryRequest};
pub use time_range::extract_time_range;
