//! Conversation store
//!
//! Single source of truth for all conversations, their messages, and the
//! current selection. Callers never mutate conversations directly; every
//! change goes through a store operation, and a rejected operation leaves
//! the store untouched.

use tracing::{debug, info};

use crate::clock::current_clock_time;
use crate::conversation::{Conversation, ConversationId, ConversationKind};
use crate::error::{ChatError, Result};
use crate::message::{Message, MessageId, Priority};
use crate::seed::seed_conversations;

/// Owned conversation state with controlled mutation
///
/// Selection is part of the store: selecting a conversation is the only
/// thing that clears its unread counter, and there is no deselect
/// operation.
///
/// # Examples
///
/// ```
/// use workdeck_chat::{ConversationStore, ConversationKind};
///
/// let mut store = ConversationStore::seeded();
/// store.select_conversation(1).unwrap();
/// store.send_message(1, "on my way").unwrap();
///
/// let hits: Vec<_> = store
///     .query_conversations(ConversationKind::Private, "on my way")
///     .collect();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    selected: Option<ConversationId>,
}

impl ConversationStore {
    /// Create a store over the given conversations, nothing selected
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            selected: None,
        }
    }

    /// Create a store preloaded with the seed dataset
    pub fn seeded() -> Self {
        Self::new(seed_conversations())
    }

    /// All conversations in insertion order
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Look up a conversation by id
    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Id of the current selection, if any
    pub fn selected(&self) -> Option<ConversationId> {
        self.selected
    }

    /// The currently selected conversation, if any
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select a conversation and clear its unread counter
    ///
    /// Idempotent: selecting the same id twice yields the same state as
    /// selecting it once. Other conversations' counters are untouched.
    pub fn select_conversation(&mut self, id: ConversationId) -> Result<&Conversation> {
        let pos = self
            .position(id)
            .ok_or(ChatError::ConversationNotFound(id))?;

        self.selected = Some(id);
        let conv = &mut self.conversations[pos];
        conv.unread_count = 0;

        debug!("Selected conversation {} ({})", id, conv.display_name);
        Ok(&self.conversations[pos])
    }

    /// Append a locally authored message to the selected conversation
    ///
    /// The target must be the current selection. The new message gets the
    /// next id in the conversation, the local-user sentinel as sender,
    /// normal priority, no tag, and the current formatted clock time.
    /// Prior messages are never touched.
    pub fn send_message(&mut self, conversation_id: ConversationId, text: &str) -> Result<&Conversation> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        match self.selected {
            None => return Err(ChatError::NoSelection),
            Some(sel) if sel != conversation_id => {
                return Err(ChatError::NotSelected(conversation_id))
            }
            Some(_) => {}
        }
        let pos = self
            .position(conversation_id)
            .ok_or(ChatError::ConversationNotFound(conversation_id))?;

        let conv = &mut self.conversations[pos];
        let id = conv.next_message_id();
        conv.messages
            .push(Message::outgoing(id, text, current_clock_time()));

        info!("Sent message {} to conversation {}", id, conversation_id);
        Ok(&self.conversations[pos])
    }

    /// Replace the priority of a single remote-authored message
    ///
    /// Only the target message's priority field changes; locally authored
    /// messages are rejected.
    pub fn set_message_priority(
        &mut self,
        conversation_id: ConversationId,
        message_id: MessageId,
        priority: Priority,
    ) -> Result<&Message> {
        let pos = self
            .position(conversation_id)
            .ok_or(ChatError::ConversationNotFound(conversation_id))?;

        let conv = &mut self.conversations[pos];
        let idx = conv
            .messages
            .iter()
            .position(|m| m.id == message_id)
            .ok_or(ChatError::MessageNotFound(message_id))?;

        if conv.messages[idx].is_local() {
            return Err(ChatError::OwnMessage(message_id));
        }

        conv.messages[idx].priority = priority;
        debug!(
            "Set priority of message {} in conversation {} to {}",
            message_id,
            conversation_id,
            priority.as_str()
        );
        Ok(&self.conversations[pos].messages[idx])
    }

    /// The filtered conversation view
    ///
    /// Pure and restartable: repeated calls with the same inputs over an
    /// unchanged store yield the same sequence, in insertion order. A
    /// conversation is included when its kind matches and the query is
    /// empty, or its display name or any message body contains the query
    /// case-insensitively.
    pub fn query_conversations(
        &self,
        kind: ConversationKind,
        query: &str,
    ) -> impl Iterator<Item = &Conversation> + '_ {
        let query = query.to_owned();
        self.conversations
            .iter()
            .filter(move |c| c.kind == kind && c.matches_query(&query))
    }

    fn position(&self, id: ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::LOCAL_SENDER;

    #[test]
    fn test_select_clears_only_target_unread() {
        let mut store = ConversationStore::seeded();
        assert_eq!(store.get(1).unwrap().unread_count, 2);
        assert_eq!(store.get(3).unwrap().unread_count, 5);

        store.select_conversation(1).unwrap();

        assert_eq!(store.selected(), Some(1));
        assert_eq!(store.get(1).unwrap().unread_count, 0);
        assert_eq!(store.get(3).unwrap().unread_count, 5);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = ConversationStore::seeded();
        once.select_conversation(1).unwrap();

        let mut twice = ConversationStore::seeded();
        twice.select_conversation(1).unwrap();
        twice.select_conversation(1).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut store = ConversationStore::seeded();
        let before = store.clone();

        let err = store.select_conversation(99).unwrap_err();

        assert_eq!(err, ChatError::ConversationNotFound(99));
        assert_eq!(store, before);
    }

    #[test]
    fn test_send_appends_one_message_at_tail() {
        let mut store = ConversationStore::seeded();
        store.select_conversation(1).unwrap();
        let before: Vec<Message> = store.get(1).unwrap().messages.clone();

        let conv = store.send_message(1, "ok").unwrap();

        assert_eq!(conv.messages.len(), before.len() + 1);
        assert_eq!(&conv.messages[..before.len()], &before[..]);

        let sent = conv.messages.last().unwrap();
        assert_eq!(sent.id, before.iter().map(|m| m.id).max().unwrap() + 1);
        assert_eq!(sent.sender, LOCAL_SENDER);
        assert_eq!(sent.priority, Priority::Normal);
        assert!(!sent.tagged);
    }

    #[test]
    fn test_send_rejects_blank_text() {
        let mut store = ConversationStore::seeded();
        store.select_conversation(1).unwrap();
        let before = store.clone();

        assert_eq!(store.send_message(1, "").unwrap_err(), ChatError::EmptyMessage);
        assert_eq!(store.send_message(1, "   \t").unwrap_err(), ChatError::EmptyMessage);
        assert_eq!(store, before);
    }

    #[test]
    fn test_send_requires_selection() {
        let mut store = ConversationStore::seeded();
        let before = store.clone();

        assert_eq!(store.send_message(1, "hello").unwrap_err(), ChatError::NoSelection);
        assert_eq!(store, before);
    }

    #[test]
    fn test_send_rejects_unselected_target() {
        let mut store = ConversationStore::seeded();
        store.select_conversation(1).unwrap();
        let before = store.clone();

        assert_eq!(store.send_message(2, "hello").unwrap_err(), ChatError::NotSelected(2));
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_priority_changes_only_target_field() {
        let mut store = ConversationStore::seeded();
        let mut expected = store.clone();

        store.set_message_priority(2, 1, Priority::Medium).unwrap();

        // Patch the one field on the snapshot; everything else must match.
        expected
            .conversations
            .iter_mut()
            .find(|c| c.id == 2)
            .unwrap()
            .messages[0]
            .priority = Priority::Medium;
        assert_eq!(store, expected);
    }

    #[test]
    fn test_set_priority_unknown_ids_are_noops() {
        let mut store = ConversationStore::seeded();
        let before = store.clone();

        assert_eq!(
            store.set_message_priority(99, 1, Priority::High).unwrap_err(),
            ChatError::ConversationNotFound(99)
        );
        assert_eq!(
            store.set_message_priority(1, 99, Priority::High).unwrap_err(),
            ChatError::MessageNotFound(99)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_priority_rejects_own_messages() {
        let mut store = ConversationStore::seeded();
        let before = store.clone();

        // Message 2 in conversation 1 is from the local user.
        assert_eq!(
            store.set_message_priority(1, 2, Priority::High).unwrap_err(),
            ChatError::OwnMessage(2)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_query_by_kind_preserves_order() {
        let store = ConversationStore::seeded();

        let ids: Vec<_> = store
            .query_conversations(ConversationKind::Private, "")
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let ids: Vec<_> = store
            .query_conversations(ConversationKind::Group, "")
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_query_searches_message_bodies() {
        let store = ConversationStore::seeded();

        let hits: Vec<_> = store
            .query_conversations(ConversationKind::Group, "sprint")
            .map(|c| c.id)
            .collect();
        assert_eq!(hits, vec![3]);

        // Same query under the other kind filter finds nothing.
        let hits: Vec<_> = store
            .query_conversations(ConversationKind::Private, "sprint")
            .collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_query_is_restartable() {
        let store = ConversationStore::seeded();

        let first: Vec<_> = store
            .query_conversations(ConversationKind::Private, "bug")
            .map(|c| c.id)
            .collect();
        let second: Vec<_> = store
            .query_conversations(ConversationKind::Private, "bug")
            .map(|c| c.id)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![2]);
    }
}
