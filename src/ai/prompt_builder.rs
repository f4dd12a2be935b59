//! Prompt text for channel summaries.

use crate::core::models::{SummaryRequest, TranscriptEntry};

pub const SYSTEM_INSTRUCTION: &str = "你是一個專業的對話總結助手，請用繁體中文進行總結。";

pub const PROMPT_PREAMBLE: &str = "請依照時間與討論的內容總結以下對話內容，使用繁體中文回答：";

pub const PROMPT_CLOSING: &str = "請提供一個簡潔的總結，分段包含主要討論點和重要結論。";

pub const SUMMARY_TEMPERATURE: f64 = 0.7;

pub const SUMMARY_MAX_TOKENS: i64 = 500;

/// Transcript lines joined with newlines, in the order given.
#[must_use]
pub fn render_transcript(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn build_user_prompt(entries: &[TranscriptEntry]) -> String {
    format!(
        "{PROMPT_PREAMBLE}\n\n{}\n\n{PROMPT_CLOSING}",
        render_transcript(entries)
    )
}

/// Assemble the full request for `entries`, which must already be oldest first.
#[must_use]
pub fn build_summary_request(model: &str, entries: &[TranscriptEntry]) -> SummaryRequest {
    SummaryRequest {
        model: model.to_string(),
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_prompt: build_user_prompt(entries),
        temperature: SUMMARY_TEMPERATURE,
        max_tokens: SUMMARY_MAX_TOKENS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_lines_keep_order() {
        let entries = vec![
            TranscriptEntry::new("Alice", "first"),
            TranscriptEntry::new("Bob", "second"),
        ];
        assert_eq!(render_transcript(&entries), "Alice: first\nBob: second");
    }

    #[test]
    fn user_prompt_wraps_transcript() {
        let entries = vec![TranscriptEntry::new("Alice", "hi")];
        let prompt = build_user_prompt(&entries);

        assert!(prompt.starts_with(PROMPT_PREAMBLE));
        assert!(prompt.ends_with(PROMPT_CLOSING));
        assert!(prompt.contains("\n\nAlice: hi\n\n"));
    }

    #[test]
    fn empty_content_still_renders_author() {
        let entries = vec![TranscriptEntry::new("Carol", "")];
        assert_eq!(render_transcript(&entries), "Carol: ");
    }

    #[test]
    fn request_uses_fixed_sampling() {
        let request = build_summary_request("gpt-test", &[TranscriptEntry::new("A", "b")]);
        assert_eq!(request.model, "gpt-test");
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert!((request.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(request.max_tokens, 500);
    }
}
