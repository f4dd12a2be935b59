use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rendered line of channel history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub author: String,
    pub content: String,
}

impl TranscriptEntry {
    #[must_use]
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.content)
    }
}

/// Everything the LLM needs for one summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub model: String,
    pub system_instruction: String,
    pub user_prompt: String,
    pub temperature: f64,
    pub max_tokens: i64,
}

pub const USAGE_RECORD_TITLE: &str = "總結指令使用記錄";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub user_name: String,
    pub channel_name: String,
    pub message_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl UsageRecord {
    /// Labeled `(name, value, inline)` fields in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String, bool); 3] {
        [
            ("使用者", self.user_name.clone(), true),
            ("頻道", self.channel_name.clone(), true),
            ("訊息數量", self.message_count.to_string(), true),
        ]
    }
}
