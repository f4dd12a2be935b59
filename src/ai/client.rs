//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completions call used to generate summaries.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{
    ChatCompletionMessage, ChatCompletionRequest, Content, MessageRole,
};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::SummaryRequest;
use crate::core::ports::Summarizer;
use crate::errors::BotError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    base_url: String,
    http: Client,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            org_id,
            base_url,
            http,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.openai_base_url.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Translate a summary request into the chat-completions wire shape.
    #[must_use]
    pub fn completion_request(request: &SummaryRequest) -> ChatCompletionRequest {
        let messages = vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(request.system_instruction.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(request.user_prompt.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        ChatCompletionRequest::new(request.model.clone(), messages)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the service answers with a
    /// non-success status, or the response carries no text.
    pub async fn generate_summary(&self, request: &SummaryRequest) -> Result<String, BotError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using ChatGPT prompt:\n{}", request.user_prompt);

        info!(
            model = %request.model,
            estimated_input_tokens = estimate_tokens(&request.user_prompt),
            "Requesting chat completion"
        );

        let body = Self::completion_request(request);

        let mut builder = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body);

        if let Some(org) = &self.org_id {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::OpenAIError(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            BotError::OpenAIError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        debug!(choices = parsed.choices.len(), "Chat completion received");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| BotError::OpenAIError("No text in response".to_string()))
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, BotError> {
        self.generate_summary(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::prompt_builder::build_summary_request;
    use crate::core::models::TranscriptEntry;

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens(""), 1);
        assert_eq!(estimate_tokens("hello"), 2);
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let client = LlmClient::new("k".into(), None, "http://localhost:9/v1/".into());
        assert_eq!(client.endpoint(), "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn test_completion_request_has_system_then_user() {
        let request = build_summary_request("gpt-4o-mini", &[TranscriptEntry::new("A", "b")]);
        let wire = LlmClient::completion_request(&request);

        assert_eq!(wire.model, "gpt-4o-mini");
        assert_eq!(wire.messages.len(), 2);
        assert!(matches!(wire.messages[0].role, MessageRole::system));
        assert!(matches!(wire.messages[1].role, MessageRole::user));
        assert_eq!(wire.temperature, Some(0.7));
        assert_eq!(wire.max_tokens, Some(500));
    }
}
