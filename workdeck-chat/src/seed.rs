//! Seed dataset
//!
//! The prototype ships with a fixed set of conversations; all delivered
//! messages are preloaded here. Unread counts and tagged flags are static
//! attributes of this data, not derived at runtime.

use crate::conversation::{Conversation, ConversationKind};
use crate::message::{Message, MessageId, Priority, LOCAL_SENDER};

fn message(
    id: MessageId,
    sender: &str,
    content: &str,
    time: &str,
    priority: Priority,
    tagged: bool,
) -> Message {
    Message {
        id,
        sender: sender.to_string(),
        content: content.to_string(),
        timestamp: time.to_string(),
        priority,
        tagged,
    }
}

/// The preloaded conversation set
pub fn seed_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            kind: ConversationKind::Private,
            display_name: "Sarah Johnson".to_string(),
            unread_count: 2,
            messages: vec![
                message(
                    1,
                    "Sarah Johnson",
                    "Hi there! Do you have time for a quick meeting today?",
                    "9:30 AM",
                    Priority::Normal,
                    false,
                ),
                message(
                    2,
                    LOCAL_SENDER,
                    "Sure, I'm free after 2 PM",
                    "9:35 AM",
                    Priority::Normal,
                    false,
                ),
                message(
                    3,
                    "Sarah Johnson",
                    "Great! Let's meet at 3 PM in Room A102. @you Please bring the project report.",
                    "9:40 AM",
                    Priority::High,
                    true,
                ),
            ],
        },
        Conversation {
            id: 2,
            kind: ConversationKind::Private,
            display_name: "David Miller".to_string(),
            unread_count: 0,
            messages: vec![
                message(
                    1,
                    "David Miller",
                    "Have you reviewed the bug report?",
                    "8:15 AM",
                    Priority::Normal,
                    false,
                ),
                message(
                    2,
                    LOCAL_SENDER,
                    "Working on it now",
                    "8:20 AM",
                    Priority::Normal,
                    false,
                ),
            ],
        },
        Conversation {
            id: 3,
            kind: ConversationKind::Group,
            display_name: "Product Team".to_string(),
            unread_count: 5,
            messages: vec![
                message(
                    1,
                    "Alex Chen",
                    "Team, our next sprint planning is tomorrow",
                    "Yesterday",
                    Priority::Normal,
                    false,
                ),
                message(
                    2,
                    "Emily Wong",
                    "@everyone Please update your tasks on the board before the meeting",
                    "Yesterday",
                    Priority::High,
                    true,
                ),
            ],
        },
        Conversation {
            id: 4,
            kind: ConversationKind::Group,
            display_name: "Design Review".to_string(),
            unread_count: 0,
            messages: vec![
                message(
                    1,
                    "Lisa Park",
                    "New mockups are ready for review",
                    "Yesterday",
                    Priority::Normal,
                    false,
                ),
                message(
                    2,
                    LOCAL_SENDER,
                    "They look great! I have a few suggestions for the navigation",
                    "Yesterday",
                    Priority::Normal,
                    false,
                ),
            ],
        },
    ]
}
