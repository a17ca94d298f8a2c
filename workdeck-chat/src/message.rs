//! Chat message model
//!
//! A message belongs to exactly one conversation. Ids are assigned by the
//! owning conversation and are strictly increasing in creation order. The
//! timestamp is a display-formatted clock string, not an epoch value — the
//! store formats the wall clock once at send time.

use serde::{Deserialize, Serialize};

/// Message id, unique within its owning conversation
pub type MessageId = i64;

/// Sender value identifying messages authored by the local user
///
/// Everything else is a remote participant's display name.
pub const LOCAL_SENDER: &str = "Me";

/// Message priority classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Default level for every new message
    Normal,
    /// Needs attention soon
    Medium,
    /// Needs attention now
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a priority level; `None` for unrecognized input
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Id within the owning conversation, strictly increasing
    pub id: MessageId,

    /// Sender display name; [`LOCAL_SENDER`] for the local user
    pub sender: String,

    /// Text body
    pub content: String,

    /// Display-formatted send time (e.g. "9:30 AM")
    #[serde(rename = "time")]
    pub timestamp: String,

    /// Priority level; mutable only for remote-authored messages
    pub priority: Priority,

    /// Whether the message mentions the local user or the whole
    /// conversation. Set once by the seed data, immutable afterwards.
    #[serde(default)]
    pub tagged: bool,
}

impl Message {
    /// Create a locally authored message with default priority and no tag
    pub fn outgoing(id: MessageId, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            sender: LOCAL_SENDER.to_string(),
            content: content.into(),
            timestamp: timestamp.into(),
            priority: Priority::Normal,
            tagged: false,
        }
    }

    /// Whether this message was authored by the local user
    pub fn is_local(&self) -> bool {
        self.sender == LOCAL_SENDER
    }
}
