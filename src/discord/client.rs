//! Discord side of a single slash-command interaction.

use async_trait::async_trait;
use serenity::all::{ChannelId, CommandInteraction, Context, CreateMessage, GetMessages, Message};
use tracing::debug;

use super::response_builder::{
    deferred_ephemeral, ephemeral_followup, ephemeral_message, usage_embed,
};
use crate::core::models::{TranscriptEntry, UsageRecord};
use crate::core::ports::{AuditDelivery, ChatPlatform};
use crate::errors::BotError;

/// Name shown for a message author: global display name, else username.
#[must_use]
pub fn author_display_name(message: &Message) -> String {
    message
        .author
        .global_name
        .clone()
        .unwrap_or_else(|| message.author.name.clone())
}

pub struct DiscordInteraction<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
}

impl<'a> DiscordInteraction<'a> {
    #[must_use]
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self { ctx, command }
    }
}

#[async_trait]
impl ChatPlatform for DiscordInteraction<'_> {
    fn caller_can_read_messages(&self) -> bool {
        self.command
            .member
            .as_ref()
            .and_then(|member| member.permissions)
            .is_some_and(|permissions| permissions.view_channel())
    }

    fn bot_can_read_history(&self) -> bool {
        self.command
            .app_permissions
            .is_some_and(|permissions| permissions.read_message_history())
    }

    fn invoker_name(&self) -> String {
        self.command.user.name.clone()
    }

    async fn channel_name(&self) -> Result<String, BotError> {
        let channel = self.command.channel_id.to_channel(self.ctx).await?;
        Ok(channel
            .guild()
            .map_or_else(|| self.command.channel_id.to_string(), |c| c.name))
    }

    async fn respond_ephemeral(&self, content: &str) -> Result<(), BotError> {
        self.command
            .create_response(self.ctx, ephemeral_message(content))
            .await?;
        Ok(())
    }

    async fn defer_ephemeral(&self) -> Result<(), BotError> {
        self.command
            .create_response(self.ctx, deferred_ephemeral())
            .await?;
        Ok(())
    }

    async fn followup_ephemeral(&self, content: &str) -> Result<(), BotError> {
        self.command
            .create_followup(self.ctx, ephemeral_followup(content))
            .await?;
        Ok(())
    }

    async fn fetch_recent_messages(&self, limit: u8) -> Result<Vec<TranscriptEntry>, BotError> {
        let messages = self
            .command
            .channel_id
            .messages(self.ctx, GetMessages::new().limit(limit))
            .await?;

        debug!(
            channel_id = %self.command.channel_id,
            count = messages.len(),
            "Fetched channel history"
        );

        Ok(messages
            .into_iter()
            .map(|message| {
                let author = author_display_name(&message);
                TranscriptEntry::new(author, message.content)
            })
            .collect())
    }

    async fn post_usage_record(
        &self,
        channel_id: u64,
        record: &UsageRecord,
    ) -> Result<AuditDelivery, BotError> {
        let channel_id = ChannelId::new(channel_id);

        let Some(channel) = channel_id
            .to_channel(self.ctx)
            .await
            .ok()
            .and_then(|c| c.guild())
        else {
            return Ok(AuditDelivery::ChannelNotFound);
        };

        let bot_id = self.ctx.cache.current_user().id;
        let permissions = channel.permissions_for_user(&self.ctx.cache, bot_id)?;
        if !permissions.send_messages() {
            return Ok(AuditDelivery::MissingPermission);
        }

        channel_id
            .send_message(self.ctx, CreateMessage::new().embed(usage_embed(record)?))
            .await?;

        Ok(AuditDelivery::Posted)
    }
}
