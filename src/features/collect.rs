use tracing::debug;

use crate::core::models::TranscriptEntry;
use crate::core::ports::ChatPlatform;
use crate::errors::BotError;

/// Number of recent messages pulled from the channel per invocation.
pub const HISTORY_LIMIT: u8 = 50;

/// Fetch recent channel history and return it oldest first.
///
/// # Errors
///
/// Returns an error if the platform history call fails.
pub async fn collect_transcript(
    platform: &dyn ChatPlatform,
) -> Result<Vec<TranscriptEntry>, BotError> {
    let mut entries = platform.fetch_recent_messages(HISTORY_LIMIT).await?;
    // history arrives newest first
    entries.reverse();
    debug!(count = entries.len(), "Collected channel transcript");
    Ok(entries)
}
