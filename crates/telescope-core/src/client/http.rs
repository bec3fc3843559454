//! OpenAI-compatible chat completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatClient, Message};
use crate::bail_network;
use crate::error::{Result, TelescopeError};

/// Path appended to the normalized base URL
const COMPLETIONS_PATH: &str = "v1/chat/completions";

/// Bearer token sent when no API key is configured
const PLACEHOLDER_API_KEY: &str = "dummy";

/// Longest slice of an error body quoted back in a network error
const ERROR_BODY_LIMIT: usize = 500;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat endpoints
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    completions_url: Url,
    api_key: String,
    timeout: Duration,
}

impl HttpChatClient {
    /// Create a client for `base_url`.
    ///
    /// The base URL is normalized to end in exactly one `/` before the
    /// completions path is joined onto it.
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let normalized = normalize_base_url(base_url);
        let completions_url = Url::parse(&normalized)
            .and_then(|base| base.join(COMPLETIONS_PATH))
            .map_err(|e| TelescopeError::config(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TelescopeError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            completions_url,
            api_key: api_key
                .filter(|k| !k.is_empty())
                .unwrap_or(PLACEHOLDER_API_KEY)
                .to_string(),
            timeout,
        })
    }

    pub fn completions_url(&self) -> &Url {
        &self.completions_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Strip trailing slashes and append exactly one
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim().trim_end_matches('/'))
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        debug!(url = %self.completions_url, model, messages = messages.len(), "chat_request");

        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .json(&ChatRequest { model, messages })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TelescopeError::network(format!(
                        "request failed: timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else {
                    TelescopeError::network(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail_network!("API request failed: {} - {}", status, excerpt(&body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| TelescopeError::network(format!("failed to parse response: {e}")))?;

        let Some(choice) = body.choices.into_iter().next() else {
            bail_network!("no choices in response");
        };

        let Some(content) = choice.message.content else {
            bail_network!("failed to parse response: missing message content");
        };

        Ok(content)
    }
}
