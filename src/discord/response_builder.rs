//! Builders for the Discord payloads the bot sends.

use serenity::all::{
    Colour, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Timestamp,
};

use crate::commands::SlashCommand;
use crate::core::models::{USAGE_RECORD_TITLE, UsageRecord};
use crate::errors::BotError;

/// Immediate reply visible only to the invoking user.
#[must_use]
pub fn ephemeral_message(text: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
    )
}

/// "Thinking…" acknowledgment whose eventual follow-ups stay private.
#[must_use]
pub fn deferred_ephemeral() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}

#[must_use]
pub fn ephemeral_followup(text: &str) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(text)
        .ephemeral(true)
}

#[must_use]
pub fn command_registration(command: &SlashCommand) -> CreateCommand {
    CreateCommand::new(command.name).description(command.description)
}

/// Embed posted to the audit channel.
///
/// # Errors
///
/// Returns an error if the record timestamp is outside Discord's range.
pub fn usage_embed(record: &UsageRecord) -> Result<CreateEmbed, BotError> {
    let timestamp = Timestamp::from_unix_timestamp(record.timestamp.timestamp())
        .map_err(|e| BotError::GeneralError(format!("Invalid usage timestamp: {}", e)))?;

    let embed = CreateEmbed::new()
        .title(USAGE_RECORD_TITLE)
        .colour(Colour::BLUE)
        .timestamp(timestamp)
        .fields(record.fields());

    Ok(embed)
}
