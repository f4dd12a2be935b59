//! All Discord-specific functionality

pub mod client;
pub mod handler;
pub mod response_builder;

use std::sync::Arc;

use serenity::Client;
use tracing::{info, warn};

pub use client::DiscordInteraction;
pub use handler::BotHandler;

use crate::bot::RecapBot;
use crate::errors::BotError;

/// Connect to the gateway and serve interactions until the connection ends
/// or the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the gateway connection
/// fails.
pub async fn run(bot: RecapBot) -> Result<(), BotError> {
    let token = bot.config().discord_token.clone();
    let handler = BotHandler::new(Arc::new(bot));

    let mut client = Client::builder(&token, BotHandler::intents())
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested, closing gateway shards");
                shard_manager.shutdown_all().await;
            }
            Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
        }
    });

    client.start().await?;
    Ok(())
}
