//! Discord event handler for serenity.

use std::sync::Arc;

use serenity::{
    all::{Command, Context, EventHandler, GatewayIntents, Interaction, Ready},
    async_trait,
};
use tracing::{debug, error, info};

use super::client::DiscordInteraction;
use super::response_builder::command_registration;
use crate::bot::RecapBot;
use crate::commands::{self, COMMANDS};

/// Handler for Discord gateway events.
pub struct BotHandler {
    bot: Arc<RecapBot>,
}

impl BotHandler {
    #[must_use]
    pub fn new(bot: Arc<RecapBot>) -> Self {
        Self { bot }
    }

    /// Gateway intents requested once at startup.
    #[must_use]
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl EventHandler for BotHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let registrations = COMMANDS.iter().map(command_registration).collect();

        match Command::set_global_commands(&ctx.http, registrations).await {
            Ok(synced) => info!(count = synced.len(), "Synced application commands"),
            Err(e) => error!("Failed to sync application commands: {}", e),
        }

        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "Discord bot ready"
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            debug!("Ignoring non-command interaction");
            return;
        };

        let platform = DiscordInteraction::new(&ctx, &command);
        commands::dispatch(&command.data.name, &platform, &self.bot).await;
    }
}
