// src/conversation.rs
// Chat transcript records kept by the UI side (terminal chat, HTTP clients).
// The engine never sees these; it only gets the latest message text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{TherapistResponse, get_welcome_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One rendered chat bubble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: Utc::now(),
            emotion: None,
            intent: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into())
    }

    pub fn welcome() -> Self {
        Self::new(ChatRole::Assistant, get_welcome_message().to_string())
    }

    /// Assistant bubble carrying the engine's emotion and intent labels
    pub fn from_response(response: &TherapistResponse) -> Self {
        let mut msg = Self::new(ChatRole::Assistant, response.message.clone());
        msg.emotion = Some(response.emotion.clone());
        msg.intent = Some(response.intent.clone());
        msg
    }
}

/// Messages shown in one session. Lives only as long as the process.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Starts with the welcome message
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::welcome()],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drop everything and start over from the welcome message.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::welcome());
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Messages the user sent since the last reset
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .count()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
