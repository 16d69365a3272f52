//! Session Management
//!
//! A chat session is a two-state machine: it starts `Running` and moves to
//! `Terminated` once the user says goodbye (or input ends). Nothing is
//! recorded after termination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BuddyError, Result};
use crate::intent::Intent;
use crate::message::{Conversation, Message};

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Running,
    Terminated,
}

/// A chat session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// Conversation history
    pub conversation: Conversation,

    /// Current lifecycle state
    pub state: SessionState,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new running session
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            conversation: Conversation::new(),
            state: SessionState::Running,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Update the activity timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record a classified user query
    pub fn record_query(&mut self, content: impl Into<String>, intent: Intent) -> Result<()> {
        self.record(Message::user(content).with_intent(intent))
    }

    /// Record an assistant reply
    pub fn record_reply(&mut self, content: impl Into<String>) -> Result<()> {
        self.record(Message::assistant(content))
    }

    fn record(&mut self, message: Message) -> Result<()> {
        if !self.is_running() {
            return Err(BuddyError::Session(format!(
                "session {} is terminated",
                self.id
            )));
        }
        self.conversation.push(message);
        self.touch();
        Ok(())
    }

    /// End the session. Idempotent.
    pub fn terminate(&mut self) {
        if self.is_running() {
            self.state = SessionState::Terminated;
            self.touch();
        }
    }

    /// Message count
    pub fn message_count(&self) -> usize {
        self.conversation.len()
    }

    /// Duration since creation
    pub fn duration(&self) -> chrono::Duration {
        self.updated_at - self.created_at
    }

    /// Full transcript as pretty JSON
    pub fn transcript_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.conversation)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
