//! The `/summary` command.

use tracing::{error, info};

use super::CommandFuture;
use crate::bot::RecapBot;
use crate::core::config::AppConfig;
use crate::core::ports::{ChatPlatform, Summarizer};
use crate::errors::BotError;
use crate::features::audit::record_usage_best_effort;
use crate::features::collect::collect_transcript;
use crate::features::deliver::{
    MISSING_HISTORY_PERMISSION_NOTICE, NO_MESSAGES_NOTICE, format_summary_failure,
    format_summary_reply,
};
use crate::features::summarize::summarize_transcript;

pub const NAME: &str = "summary";

pub const DESCRIPTION: &str = "總結此頻道最近的對話";

/// How a `/summary` invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    Delivered { message_count: usize },
    NothingToSummarize,
    BotMissingPermission,
    Failed,
}

/// Command-table entry point.
pub fn run<'a>(platform: &'a dyn ChatPlatform, bot: &'a RecapBot) -> CommandFuture<'a> {
    Box::pin(async move {
        execute(platform, bot.summarizer(), bot.config())
            .await
            .map(|_| ())
    })
}

/// Run one `/summary` invocation against `platform`.
///
/// Caller permissions are checked by the dispatcher before this runs.
///
/// # Errors
///
/// Only failures to answer or acknowledge the interaction escape; everything
/// after the acknowledgment is reported to the caller as a follow-up.
pub async fn execute(
    platform: &dyn ChatPlatform,
    summarizer: &dyn Summarizer,
    config: &AppConfig,
) -> Result<SummaryOutcome, BotError> {
    if !platform.bot_can_read_history() {
        platform
            .respond_ephemeral(MISSING_HISTORY_PERMISSION_NOTICE)
            .await?;
        return Ok(SummaryOutcome::BotMissingPermission);
    }

    // acknowledge before any slow work
    platform.defer_ephemeral().await?;

    match summarize_and_deliver(platform, summarizer, config).await {
        Ok(Some(message_count)) => {
            record_usage_best_effort(platform, config.log_channel_id, message_count).await;
            Ok(SummaryOutcome::Delivered { message_count })
        }
        Ok(None) => Ok(SummaryOutcome::NothingToSummarize),
        Err(e) => {
            let reply = format_summary_failure(&e);
            error!("{}", reply);
            if let Err(send_err) = platform.followup_ephemeral(&reply).await {
                error!("Failed to report summary error to caller: {}", send_err);
            }
            Ok(SummaryOutcome::Failed)
        }
    }
}

/// Fetch, summarize and reply. Returns the transcript length on delivery.
async fn summarize_and_deliver(
    platform: &dyn ChatPlatform,
    summarizer: &dyn Summarizer,
    config: &AppConfig,
) -> Result<Option<usize>, BotError> {
    let transcript = collect_transcript(platform).await?;

    if transcript.is_empty() {
        platform.followup_ephemeral(NO_MESSAGES_NOTICE).await?;
        return Ok(None);
    }

    let summary = summarize_transcript(summarizer, &config.openai_model, &transcript).await?;

    platform
        .followup_ephemeral(&format_summary_reply(&summary))
        .await?;
    info!(messages = transcript.len(), "Summary delivered");

    Ok(Some(transcript.len()))
}
