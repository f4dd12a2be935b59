//! recap - A Discord bot that privately summarizes a channel's recent conversation.
//!
//! The `/summary` slash command fetches the last 50 messages of the invoking
//! channel, asks an `OpenAI` chat model for a summary, and replies with a
//! message only the caller can see. Each delivered summary is also logged to a
//! configured audit channel.
//!
//! # Architecture
//!
//! - [`discord`] owns the serenity gateway client and adapts each interaction
//!   to the [`crate::core::ports::ChatPlatform`] trait
//! - [`ai`] talks to the chat-completions endpoint behind
//!   [`crate::core::ports::Summarizer`]
//! - [`commands`] holds the command table, the permission gate and the
//!   `/summary` orchestration
//! - [`features`] contains the pipeline stages (collect, summarize, deliver,
//!   audit)
//!
//! # Example
//!
//! ```no_run
//! use recap::RecapBot;
//! use recap::core::config::AppConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     recap::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     recap::discord::run(RecapBot::new(config)).await?;
//!     Ok(())
//! }
//! ```
pub mod ai;
pub mod bot;
pub mod commands;
pub mod core;
pub mod discord;
pub mod errors;
pub mod features;

pub use ai::estimate_tokens;
pub use bot::RecapBot;
pub use errors::BotError;

/// Configure structured logging.
///
/// Honors `RUST_LOG` (default `info`). Set `LOG_FORMAT=json` for JSON lines.
/// Calling this more than once leaves the first subscriber in place.
///
/// # Example
///
/// ```
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}
