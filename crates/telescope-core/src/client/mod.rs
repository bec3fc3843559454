//! Chat clients for sending benchmark prompts to a model.
//!
//! [`ChatClient`] is the seam the executor talks to. [`HttpChatClient`]
//! speaks the OpenAI-style chat completions protocol; [`StaticChatClient`]
//! and [`ScriptedChatClient`] are in-memory doubles for dry runs and tests.

pub mod http;
pub mod mock;

pub use http::HttpChatClient;
pub use mock::{ScriptedChatClient, StaticChatClient};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Something that can answer a chat conversation for a named model
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `messages` to `model` and return the reply text.
    ///
    /// Fails with [`TelescopeError::Network`](crate::error::TelescopeError::Network).
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String>;
}

#[async_trait]
impl<T: ChatClient + ?Sized> ChatClient for Box<T> {
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        (**self).chat(model, messages).await
    }
}

#[async_trait]
impl<T: ChatClient + ?Sized> ChatClient for std::sync::Arc<T> {
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        (**self).chat(model, messages).await
    }
}
