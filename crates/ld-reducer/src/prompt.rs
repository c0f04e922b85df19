//! Summary prompt + chat-completion request payload for the reduced log.
//!
//! Only the request body is built here; sending it is the caller's job.

use ld_core::config::SummaryConfig;
use serde::{Deserialize, Serialize};

const PROMPT_HEADER: &str = "You are an expert in Home Assistant logs. \
Your task is to analyze the following log snippet and provide:

1. A list of actionable steps the user can take to resolve the reported errors and warnings. \
Refer to the specific entities or integrations involved (e.g., sensor names, platform names).
2. A brief summary of what was happening in the system.

You do not need to group similar issues. That has already been handled.

Log:
";

/// User prompt wrapping the reduced log.
pub fn generate_prompt(reduced: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_HEADER.len() + reduced.len() + 1);
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str(reduced);
    prompt.push('\n');
    prompt
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chat-completion request body (OpenAI wire shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SummaryRequest {
    pub fn new(config: &SummaryConfig, reduced: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage { role: Role::System, content: config.system_message.clone() },
                ChatMessage { role: Role::User, content: generate_prompt(reduced) },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
