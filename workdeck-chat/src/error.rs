//! Error handling for the conversation store
//!
//! Every failure in the store is recoverable: a rejected operation returns
//! an error and leaves the store unchanged. Callers that want the
//! prototype's silent behavior (the chat panel) log the error and move on;
//! callers that want to assert on failures (tests) match on the variant.

use thiserror::Error;

use crate::{ConversationId, MessageId};

/// Result type for conversation store operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Errors that can occur during conversation store operations
///
/// All variants are non-fatal. An operation that returns an error has not
/// touched the store: no message appended, no counter changed, no selection
/// moved.
///
/// # Examples
///
/// ```
/// use workdeck_chat::ChatError;
///
/// let error = ChatError::ConversationNotFound(99);
/// assert_eq!(error.to_string(), "Conversation not found: 99");
///
/// let error = ChatError::NoSelection;
/// assert_eq!(error.to_string(), "No conversation selected");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The requested conversation does not exist in the store
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    /// The requested message does not exist in its conversation
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    /// Message text was empty or whitespace-only
    #[error("Empty message text")]
    EmptyMessage,

    /// An operation that requires a selection ran with none
    #[error("No conversation selected")]
    NoSelection,

    /// The target conversation exists but is not the current selection
    #[error("Conversation {0} is not the active selection")]
    NotSelected(ConversationId),

    /// Priority changes are not allowed on locally authored messages
    #[error("Cannot change priority of own message: {0}")]
    OwnMessage(MessageId),
}

impl ChatError {
    /// Get a user-friendly error message suitable for display in UI
    ///
    /// # Examples
    ///
    /// ```
    /// use workdeck_chat::ChatError;
    ///
    /// let error = ChatError::NoSelection;
    /// assert_eq!(
    ///     error.user_message(),
    ///     "Select a conversation to start messaging."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            ChatError::ConversationNotFound(id) => {
                format!("Conversation '{}' not found.", id)
            }
            ChatError::MessageNotFound(id) => {
                format!("Message '{}' not found.", id)
            }
            ChatError::EmptyMessage => "Type a message before sending.".to_string(),
            ChatError::NoSelection => "Select a conversation to start messaging.".to_string(),
            ChatError::NotSelected(id) => {
                format!("Conversation '{}' is not open.", id)
            }
            ChatError::OwnMessage(_) => {
                "Priority can only be set on received messages.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ChatError::ConversationNotFound(3);
        assert_eq!(error.to_string(), "Conversation not found: 3");

        let error = ChatError::MessageNotFound(7);
        assert_eq!(error.to_string(), "Message not found: 7");

        let error = ChatError::EmptyMessage;
        assert_eq!(error.to_string(), "Empty message text");

        let error = ChatError::NotSelected(2);
        assert_eq!(error.to_string(), "Conversation 2 is not the active selection");
    }

    #[test]
    fn test_user_messages() {
        assert!(ChatError::ConversationNotFound(1)
            .user_message()
            .contains("not found"));
        assert!(ChatError::OwnMessage(4).user_message().contains("received"));
    }
}
