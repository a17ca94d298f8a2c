//! Chat panel action surface
//!
//! The operation set a presentation layer dispatches into, plus the filter
//! state that shapes the visible conversation list. Rejected actions are
//! logged and swallowed: the prototype has no user-visible error surface,
//! so "no state change" is the observable outcome of a bad action.

use tracing::warn;

use crate::conversation::{Conversation, ConversationId, ConversationKind};
use crate::message::{MessageId, Priority};
use crate::store::ConversationStore;

/// User actions the chat panel accepts
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    SelectConversation(ConversationId),
    SendMessage(String), // implicitly targets the current selection
    SetPriority(ConversationId, MessageId, Priority),
    SetKindFilter(ConversationKind),
    SetSearchQuery(String),
}

/// Chat panel state: the store plus the live filter inputs
///
/// The visible conversation list is derived on every read; there is no
/// cached intermediate state to go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPanel {
    store: ConversationStore,
    kind_filter: ConversationKind,
    search_query: String,
}

impl ChatPanel {
    /// Create a panel over an existing store, private filter, empty query
    pub fn new(store: ConversationStore) -> Self {
        Self {
            store,
            kind_filter: ConversationKind::Private,
            search_query: String::new(),
        }
    }

    /// Panel over the seeded store
    pub fn seeded() -> Self {
        Self::new(ConversationStore::seeded())
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn kind_filter(&self) -> ConversationKind {
        self.kind_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Apply a user action
    ///
    /// Store rejections (unknown ids, blank text, no selection) are logged
    /// and leave the panel unchanged.
    pub fn apply(&mut self, action: ChatAction) {
        match action {
            ChatAction::SelectConversation(id) => {
                if let Err(e) = self.store.select_conversation(id) {
                    warn!("Select rejected: {}", e);
                }
            }
            ChatAction::SendMessage(text) => match self.store.selected() {
                Some(id) => {
                    if let Err(e) = self.store.send_message(id, &text) {
                        warn!("Send rejected: {}", e);
                    }
                }
                None => warn!("Send rejected: no conversation selected"),
            },
            ChatAction::SetPriority(conversation_id, message_id, priority) => {
                if let Err(e) = self
                    .store
                    .set_message_priority(conversation_id, message_id, priority)
                {
                    warn!("Priority change rejected: {}", e);
                }
            }
            ChatAction::SetKindFilter(kind) => self.kind_filter = kind,
            ChatAction::SetSearchQuery(query) => self.search_query = query,
        }
    }

    /// The conversation list under the current filter and query
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.store
            .query_conversations(self.kind_filter, &self.search_query)
            .collect()
    }
}
