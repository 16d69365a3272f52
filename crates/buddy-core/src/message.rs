//! Conversation Messages
//!
//! Transcript of a chat session: user queries and the assistant's replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input
    User,
    /// Assistant response
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in a conversation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Text content
    pub content: String,

    /// Intent the query was classified as (user messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    /// Timestamp
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            intent: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach the classified intent
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }
}

/// Conversation history with utility methods
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of user queries so far
    pub fn user_turns(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    /// How often each intent was asked for, in first-seen order
    pub fn intent_counts(&self) -> Vec<(Intent, usize)> {
        let mut counts: Vec<(Intent, usize)> = Vec::new();
        for intent in self.messages.iter().filter_map(|m| m.intent) {
            match counts.iter_mut().find(|(seen, _)| *seen == intent) {
                Some((_, n)) => *n += 1,
                None => counts.push((intent, 1)),
            }
        }
        counts
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello").with_intent(Intent::Unknown);
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert_eq!(msg.intent, Some(Intent::Unknown));
    }

    #[test]
    fn test_conversation() {
        let mut conv = Conversation::new();
        conv.push(Message::user("bitcoin?").with_intent(Intent::Bitcoin));
        conv.push(Message::assistant("Bitcoin card"));
        conv.push(Message::user("and bitcoin again").with_intent(Intent::Bitcoin));
        conv.push(Message::user("green?").with_intent(Intent::Sustainability));

        assert_eq!(conv.len(), 4);
        assert_eq!(conv.user_turns(), 3);
        assert_eq!(
            conv.intent_counts(),
            vec![(Intent::Bitcoin, 2), (Intent::Sustainability, 1)]
        );
    }

    #[test]
    fn test_serialized_intent_is_lowercase() {
        let msg = Message::user("xyzzy").with_intent(Intent::Unknown);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["intent"], "unknown");
        assert_eq!(json["role"], "user");
    }
}
