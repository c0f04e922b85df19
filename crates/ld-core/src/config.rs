use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DigestError, Result};
use crate::types::Severity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    pub reducer: ReducerConfig,
    pub summary: SummaryConfig,
    pub source: SourceConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    pub max_lines: usize,
    pub hours_back: u32,
    pub severities: Vec<Severity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub allowed_root: PathBuf,
    pub default_log_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            max_lines: 100,
            hours_back: 24,
            severities: Severity::ACTIONABLE.to_vec(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            temperature: 0.3,
            max_tokens: 800,
            system_message: "You help users understand Home Assistant logs clearly and concisely."
                .into(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            allowed_root: PathBuf::from("/config"),
            default_log_path: PathBuf::from("/config/home-assistant.log"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl DigestConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.reducer.validate()?;
        if !(0.0..=2.0).contains(&self.summary.temperature) {
            return Err(DigestError::InvalidConfig(format!(
                "summary.temperature must be within 0..=2, got {}",
                self.summary.temperature
            )));
        }
        if self.summary.model.trim().is_empty() {
            return Err(DigestError::InvalidConfig("summary.model is empty".into()));
        }
        Ok(())
    }
}

impl ReducerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_lines == 0 {
            return Err(DigestError::InvalidConfig("reducer.max_lines must be positive".into()));
        }
        if self.hours_back == 0 {
            return Err(DigestError::InvalidConfig("reducer.hours_back must be positive".into()));
        }
        if self.severities.is_empty() {
            return Err(DigestError::InvalidConfig("reducer.severities is empty".into()));
        }
        Ok(())
    }
}
