//! # buddy-core
//!
//! Conversation core for CryptoBuddy: keyword intent classification and the
//! chat session state machine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Chat loop                          │
//! │  ┌──────────────────┐   ┌──────────────────────────────┐  │
//! │  │ IntentClassifier │   │ Session (Running→Terminated) │  │
//! │  │  keyword rules   │   │   Conversation transcript    │  │
//! │  └──────────────────┘   └──────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Market data and analysis live in `buddy-market`; this crate has no I/O.

pub mod error;
pub mod intent;
pub mod message;
pub mod session;

pub use error::{BuddyError, Result};
pub use intent::{Intent, IntentClassifier, is_exit_command, tokenize};
pub use message::{Conversation, Message, Role};
pub use session::{Session, SessionId, SessionState};
