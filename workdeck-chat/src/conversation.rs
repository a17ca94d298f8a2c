//! Conversation model
//!
//! A conversation is an ordered, append-only message log with a display
//! name, a kind (private or group), and an unread counter. Insertion order
//! of messages is chronological order.

use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageId};

/// Conversation id, unique and stable across the store
pub type ConversationId = i64;

/// Maximum characters of the latest message shown in list previews
const PREVIEW_LEN: usize = 20;

/// Conversation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    /// One-to-one thread
    Private,
    /// Multi-participant thread
    Group,
}

impl ConversationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Group => "group",
        }
    }

    /// Parse a kind; `None` for unrecognized input
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "private" => Some(Self::Private),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// A chat thread with its ordered message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Stable identifier
    pub id: ConversationId,

    /// Private or group
    #[serde(rename = "type")]
    pub kind: ConversationKind,

    /// Display label
    #[serde(rename = "name")]
    pub display_name: String,

    /// Number of unread messages; reset to 0 when the conversation
    /// becomes the selection
    #[serde(rename = "unread")]
    pub unread_count: u32,

    /// Message log, append-only, insertion order = chronological order
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new(id: ConversationId, kind: ConversationKind, display_name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            display_name: display_name.into(),
            unread_count: 0,
            messages: Vec::new(),
        }
    }

    /// Next message id: one greater than the highest existing id
    pub fn next_message_id(&self) -> MessageId {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    /// Truncated excerpt of the latest message for list rows
    pub fn preview(&self) -> String {
        match self.messages.last() {
            Some(msg) => {
                let excerpt: String = msg.content.chars().take(PREVIEW_LEN).collect();
                format!("{}...", excerpt)
            }
            None => "No messages".to_string(),
        }
    }

    /// Case-insensitive substring match against the display name or any
    /// message body. An empty query matches every conversation.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.display_name.to_lowercase().contains(&needle)
            || self
                .messages
                .iter()
                .any(|msg| msg.content.to_lowercase().contains(&needle))
    }
}
