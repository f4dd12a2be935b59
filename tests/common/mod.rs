#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recap::RecapBot;
use recap::core::config::AppConfig;
use recap::core::models::{SummaryRequest, TranscriptEntry, UsageRecord};
use recap::core::ports::{AuditDelivery, ChatPlatform, Summarizer};
use recap::errors::BotError;

pub const AUDIT_CHANNEL_ID: u64 = 4242;

/// Something the fake platform was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Respond(String),
    Defer,
    Followup(String),
    FetchHistory(u8),
    Audit(u64, UsageRecord),
}

/// In-memory interaction that records every outbound call.
pub struct FakePlatform {
    pub caller_can_read: bool,
    pub bot_can_read: bool,
    /// Channel history, newest first like the real API.
    pub history: Vec<TranscriptEntry>,
    pub history_error: Option<String>,
    pub defer_error: Option<String>,
    pub audit_result: Result<AuditDelivery, String>,
    pub calls: Mutex<Vec<PlatformCall>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            caller_can_read: true,
            bot_can_read: true,
            history: Vec::new(),
            history_error: None,
            defer_error: None,
            audit_result: Ok(AuditDelivery::Posted),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakePlatform {
    /// Platform whose channel holds `oldest_first` messages.
    pub fn with_history(oldest_first: &[(&str, &str)]) -> Self {
        let history = oldest_first
            .iter()
            .rev()
            .map(|(author, content)| TranscriptEntry::new(*author, *content))
            .collect();
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Respond(text) | PlatformCall::Followup(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn history_fetches(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, PlatformCall::FetchHistory(_)))
            .count()
    }

    pub fn audit_records(&self) -> Vec<UsageRecord> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Audit(_, record) => Some(record),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChatPlatform for FakePlatform {
    fn caller_can_read_messages(&self) -> bool {
        self.caller_can_read
    }

    fn bot_can_read_history(&self) -> bool {
        self.bot_can_read
    }

    fn invoker_name(&self) -> String {
        "alice".to_string()
    }

    async fn channel_name(&self) -> Result<String, BotError> {
        Ok("general".to_string())
    }

    async fn respond_ephemeral(&self, content: &str) -> Result<(), BotError> {
        self.record(PlatformCall::Respond(content.to_string()));
        Ok(())
    }

    async fn defer_ephemeral(&self) -> Result<(), BotError> {
        if let Some(e) = &self.defer_error {
            return Err(BotError::ApiError(e.clone()));
        }
        self.record(PlatformCall::Defer);
        Ok(())
    }

    async fn followup_ephemeral(&self, content: &str) -> Result<(), BotError> {
        self.record(PlatformCall::Followup(content.to_string()));
        Ok(())
    }

    async fn fetch_recent_messages(&self, limit: u8) -> Result<Vec<TranscriptEntry>, BotError> {
        self.record(PlatformCall::FetchHistory(limit));
        if let Some(e) = &self.history_error {
            return Err(BotError::ApiError(e.clone()));
        }
        Ok(self.history.iter().take(limit as usize).cloned().collect())
    }

    async fn post_usage_record(
        &self,
        channel_id: u64,
        record: &UsageRecord,
    ) -> Result<AuditDelivery, BotError> {
        self.record(PlatformCall::Audit(channel_id, record.clone()));
        self.audit_result
            .clone()
            .map_err(BotError::ApiError)
    }
}

/// Summarizer returning a canned answer and remembering each request.
pub struct FakeSummarizer {
    pub response: Result<String, String>,
    pub requests: Mutex<Vec<SummaryRequest>>,
}

impl FakeSummarizer {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, BotError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map_err(BotError::OpenAIError)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        discord_token: "discord-token".to_string(),
        openai_api_key: "openai-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        openai_org_id: None,
        openai_base_url: "http://127.0.0.1:1".to_string(),
        log_channel_id: AUDIT_CHANNEL_ID,
    }
}

pub fn test_bot(summarizer: Arc<FakeSummarizer>) -> RecapBot {
    RecapBot::with_summarizer(test_config(), summarizer)
}
