//! Seams between the command logic and the outside world.
//!
//! The Discord adapter and the OpenAI client implement these traits in
//! production; tests substitute in-memory fakes.

use async_trait::async_trait;

use super::models::{SummaryRequest, TranscriptEntry, UsageRecord};
use crate::errors::BotError;

/// What happened to a usage record sent to the audit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditDelivery {
    Posted,
    ChannelNotFound,
    MissingPermission,
}

/// A single slash-command interaction on the chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Whether the invoking user may view the channel the command came from.
    fn caller_can_read_messages(&self) -> bool;

    /// Whether the bot may read message history in the invoking channel.
    fn bot_can_read_history(&self) -> bool;

    fn invoker_name(&self) -> String;

    async fn channel_name(&self) -> Result<String, BotError>;

    /// Answer the interaction with a message only the caller can see.
    async fn respond_ephemeral(&self, content: &str) -> Result<(), BotError>;

    /// Acknowledge the interaction now and reply later.
    async fn defer_ephemeral(&self) -> Result<(), BotError>;

    async fn followup_ephemeral(&self, content: &str) -> Result<(), BotError>;

    /// Most recent messages of the invoking channel, newest first.
    async fn fetch_recent_messages(&self, limit: u8) -> Result<Vec<TranscriptEntry>, BotError>;

    async fn post_usage_record(
        &self,
        channel_id: u64,
        record: &UsageRecord,
    ) -> Result<AuditDelivery, BotError>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Text of the first completion candidate.
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, BotError>;
}
