use tracing::info;

use crate::ai::prompt_builder::build_summary_request;
use crate::core::models::TranscriptEntry;
use crate::core::ports::Summarizer;
use crate::errors::BotError;

/// Generate a summary for an oldest-first transcript.
///
/// # Errors
///
/// Returns whatever the summarizer reports.
pub async fn summarize_transcript(
    summarizer: &dyn Summarizer,
    model: &str,
    entries: &[TranscriptEntry],
) -> Result<String, BotError> {
    let request = build_summary_request(model, entries);
    info!(messages = entries.len(), model, "Generating channel summary");
    summarizer.summarize(&request).await
}
