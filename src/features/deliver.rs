//! User-facing reply text.

use std::fmt::Display;

/// Discord rejects message content longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

pub const SUMMARY_HEADER: &str = "對話總結：\n\n";

pub const NO_MESSAGES_NOTICE: &str = "沒有找到可以總結的訊息。";

pub const PERMISSION_DENIED_NOTICE: &str = "您沒有足夠的權限使用此指令。";

pub const MISSING_HISTORY_PERMISSION_NOTICE: &str = "我沒有讀取訊息歷史的權限！";

const ELLIPSIS: char = '…';

/// Clip `text` to the platform limit on a character boundary.
#[must_use]
pub fn fit_message_limit(text: &str) -> String {
    if text.chars().count() <= DISCORD_MESSAGE_LIMIT {
        return text.to_string();
    }

    let mut clipped: String = text.chars().take(DISCORD_MESSAGE_LIMIT - 1).collect();
    clipped.push(ELLIPSIS);
    clipped
}

#[must_use]
pub fn format_summary_reply(summary: &str) -> String {
    fit_message_limit(&format!("{SUMMARY_HEADER}{summary}"))
}

#[must_use]
pub fn format_summary_failure(error: &impl Display) -> String {
    fit_message_limit(&format!("總結時發生錯誤: {error}"))
}

#[must_use]
pub fn format_command_failure(error: &impl Display) -> String {
    fit_message_limit(&format!("執行指令時發生錯誤: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reply_prefixes_header() {
        assert_eq!(
            format_summary_reply("Discussed deployment plan."),
            "對話總結：\n\nDiscussed deployment plan."
        );
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_message_limit("ok"), "ok");
    }

    #[test]
    fn long_text_is_clipped_on_char_boundary() {
        let long = "總".repeat(DISCORD_MESSAGE_LIMIT + 10);
        let clipped = fit_message_limit(&long);

        assert_eq!(clipped.chars().count(), DISCORD_MESSAGE_LIMIT);
        assert!(clipped.ends_with(ELLIPSIS));
    }

    #[test]
    fn text_at_limit_is_untouched() {
        let exact = "a".repeat(DISCORD_MESSAGE_LIMIT);
        assert_eq!(fit_message_limit(&exact), exact);
    }

    #[test]
    fn failure_replies_carry_description() {
        assert_eq!(format_summary_failure(&"timeout"), "總結時發生錯誤: timeout");
        assert_eq!(format_command_failure(&"boom"), "執行指令時發生錯誤: boom");
    }
}
