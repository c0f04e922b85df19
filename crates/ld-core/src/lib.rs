pub mod config;
pub mod error;
pub mod types;

pub use config::{DigestConfig, ReducerConfig, ServerConfig, SourceConfig, SummaryConfig};
pub use error::{DigestError, Result};
pub use types::{parse_timestamp, LogLine, Severity, TimeRange};

#[cfg(test)]
mod tests;
