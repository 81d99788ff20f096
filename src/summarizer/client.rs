//! LLM (`OpenAI`) API client for generating page summaries.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use super::SummaryGenerator;
use crate::core::models::SummaryRequest;
use crate::errors::SummarizationError;

/// Fixed sampling temperature; not user-tunable.
const TEMPERATURE: f64 = 0.69;

/// Fixed response token ceiling; not user-tunable.
const MAX_OUTPUT_TOKENS: i64 = 500;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when the configuration names none.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Substituted when the service returns an empty or absent message body.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary generated";

/// Completion-service client for generating summaries.
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: Option<String>) -> Self {
        Self {
            api_key,
            org_id,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Build the chat prompt: a fixed assistant persona plus one user message
    /// embedding the target language, the word ceiling (an upper bound, not
    /// an exact count), and the full source text.
    #[must_use]
    pub fn build_prompt(&self, request: &SummaryRequest) -> Vec<ChatCompletionMessage> {
        let instruction = format!(
            "Please write an effective and informative summary of the content of this \
             webpage in {} that is NO more than {} words, but feel free to use LESS if \
             APPROPRIATE:\n{}",
            request.language,
            request.max_words,
            request.source_text.as_str()
        );

        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text("You are a helpful assistant.".to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(instruction),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// Issue exactly one completion request and return its primary text.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP exchange fails or the response cannot be
    /// parsed; there is no retry.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizationError> {
        info!(
            model = %self.model_name,
            messages = prompt.len(),
            "Generating summary"
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages(&prompt),
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS,
        });

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizationError::Http(format!("Failed to build HTTP client: {e}")))?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizationError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummarizationError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizationError::Http(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = client
            .post(COMPLETIONS_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizationError::Http(format!("API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizationError::Api(format!(
                "API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummarizationError::Api(format!("Failed to parse response: {e}")))?;

        Ok(extract_message_content(&response_json)
            .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string()))
    }
}

#[async_trait]
impl SummaryGenerator for LlmClient {
    async fn generate(&self, request: &SummaryRequest) -> Result<String, SummarizationError> {
        let prompt = self.build_prompt(request);
        self.generate_summary(prompt).await
    }
}

/// Map chat messages onto the wire format of the completions endpoint.
pub(crate) fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };
            match &m.content {
                Content::Text(t) => Some(json!({ "role": role_str, "content": t })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// Pull the primary text out of a chat-completion response body.
/// `None` for an absent or empty content field.
#[must_use]
pub fn extract_message_content(response: &Value) -> Option<String> {
    let content = response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())?;

    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
