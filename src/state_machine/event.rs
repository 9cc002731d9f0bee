//! User actions that can drive the conversation

use crate::session::EventType;

/// Events produced by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Free text submitted from the input box
    UserText { text: String },
    /// One of the event-type buttons was pressed
    QuickReply { choice: EventType },
}

impl Event {
    pub fn text(text: impl Into<String>) -> Self {
        Event::UserText { text: text.into() }
    }

    pub fn quick_reply(choice: EventType) -> Self {
        Event::QuickReply { choice }
    }
}
