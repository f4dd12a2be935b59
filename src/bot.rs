use std::sync::Arc;

use crate::ai::LlmClient;
use crate::core::config::AppConfig;
use crate::core::ports::Summarizer;

/// Process-wide state shared by every command invocation.
///
/// Built once at startup and only ever read afterwards.
pub struct RecapBot {
    config: AppConfig,
    summarizer: Arc<dyn Summarizer>,
}

impl RecapBot {
    /// Construct a `RecapBot` backed by the `OpenAI` client described by `config`.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let summarizer = Arc::new(LlmClient::from_config(&config));
        Self::with_summarizer(config, summarizer)
    }

    #[must_use]
    pub fn with_summarizer(config: AppConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { config, summarizer }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn summarizer(&self) -> &dyn Summarizer {
        self.summarizer.as_ref()
    }
}
