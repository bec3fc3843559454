//! In-memory chat clients.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatClient, Message};
use crate::error::{Result, TelescopeError};

/// Reply used by [`StaticChatClient::default`]
pub const DEFAULT_MOCK_RESPONSE: &str = "Mock response";

/// Chat client that answers every request with the same text
#[derive(Debug, Clone)]
pub struct StaticChatClient {
    response: String,
}

impl StaticChatClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for StaticChatClient {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_RESPONSE)
    }
}

#[async_trait]
impl ChatClient for StaticChatClient {
    async fn chat(&self, _model: &str, _messages: &[Message]) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// A request observed by [`ScriptedChatClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Chat client that plays back a queue of replies and records every call.
///
/// Once the script is exhausted it falls back to echoing the last user
/// message, so tests only need to script the calls they care about.
#[derive(Debug, Default)]
pub struct ScriptedChatClient {
    script: Mutex<VecDeque<std::result::Result<String, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    /// Queue a failure carrying `cause`
    pub fn fail(self, cause: impl Into<String>) -> Self {
        self.push(Err(cause.into()))
    }

    fn push(self, item: std::result::Result<String, String>) -> Self {
        self.script
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(item);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(RecordedCall {
                model: model.to_string(),
                messages: messages.to_vec(),
            });

        let next = self
            .script
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front();

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(cause)) => Err(TelescopeError::network(cause)),
            None => Ok(messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default()),
        }
    }
}
