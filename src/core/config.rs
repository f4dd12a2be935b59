use std::env;

use crate::errors::BotError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_org_id: Option<String>,
    pub openai_base_url: String,
    /// Channel that receives the usage embed after each delivered summary.
    pub log_channel_id: u64,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_CHANNEL_ID` is missing or not a non-zero integer.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Credentials are not validated here; an empty token fails at first use.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_CHANNEL_ID` is missing or not a non-zero integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_channel_id = lookup("LOG_CHANNEL_ID")
            .ok_or_else(|| BotError::ConfigError("LOG_CHANNEL_ID: not set".to_string()))
            .and_then(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| BotError::ConfigError(format!("LOG_CHANNEL_ID: {}", e)))
            })?;

        if log_channel_id == 0 {
            return Err(BotError::ConfigError(
                "LOG_CHANNEL_ID: must be non-zero".to_string(),
            ));
        }

        Ok(Self {
            discord_token: lookup("DISCORD_TOKEN").unwrap_or_default(),
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: lookup("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_org_id: lookup("OPENAI_ORG_ID").filter(|o| !o.trim().is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            log_channel_id,
        })
    }
}
