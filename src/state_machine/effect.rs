//! Effects produced by routing a user action

use crate::session::Message;

/// Effects to be executed, in order, by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a message to the transcript immediately
    AppendMessage(Message),

    /// Permanently hide the quick-reply buttons
    HideQuickReplies,

    /// Send `text` to the service. `echo` is appended to the transcript only
    /// once the call succeeds, so a failed call leaves no trace.
    SendMessage { text: String, echo: Option<Message> },

    /// Discard the session (remote teardown included) and greet again
    ResetSession,
}

impl Effect {
    /// Send a user turn and echo it into the transcript on success
    pub fn send_user_message(text: impl Into<String>) -> Self {
        let text = text.into();
        Effect::SendMessage {
            echo: Some(Message::user(text.clone())),
            text,
        }
    }

    pub fn append_assistant(content: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::assistant(content))
    }
}
