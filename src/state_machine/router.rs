//! Input routing
//!
//! Decides which input affordances are valid for the current question and
//! turns a user action into the effects the runtime must carry out. Pure:
//! the store is only read.

use super::{Effect, Event};
use crate::session::SessionStore;
use thiserror::Error;

pub const DEFAULT_HELPER_TEXT: &str = "Type your message here...";
pub const COMPLETION_HELPER_TEXT: &str = "Type 'yes' to start new registration or 'no' to end";
pub const CLOSING_MESSAGE: &str =
    "Thank you for using the Hackathon Registration Chatbot! Have a great day!";

/// Placeholder text per question tag; unmapped tags use [`DEFAULT_HELPER_TEXT`]
const HELPER_TEXT: &[(&str, &str)] = &[
    (
        "partnerUrl",
        "Enter the partner organization's website URL (e.g., https://example.com)...",
    ),
    (
        "drillName_selection",
        "Enter a number to choose or type 'keep original'...",
    ),
    (
        "hasPartner",
        "Type 'yes' to add a partner organization or 'no' to continue without one...",
    ),
    (
        "drillSubCategory",
        "Pick an event type below or type your own...",
    ),
];

/// Replies that decline another registration
const NEGATIVE_REPLIES: &[&str] = &["no", "n"];

/// What kind of input the front end should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Free text only
    FreeText,
    /// Free text plus the event-type buttons
    QuickReplies,
    /// Registration finished; only a yes/no answer is meaningful
    Confirmation,
}

/// Result of routing a user action
#[derive(Debug)]
pub struct RouteResult {
    pub effects: Vec<Effect>,
}

impl RouteResult {
    pub fn new() -> Self {
        Self { effects: vec![] }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether carrying out these effects talks to the service
    #[cfg(test)]
    pub fn needs_network(&self) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, Effect::SendMessage { .. } | Effect::ResetSession))
    }
}

impl Default for RouteResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons a user action is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Quick replies are not available for this question")]
    QuickRepliesHidden,
}

pub fn input_mode(store: &SessionStore) -> InputMode {
    if store.registration_complete() {
        InputMode::Confirmation
    } else if store.quick_replies_visible() {
        InputMode::QuickReplies
    } else {
        InputMode::FreeText
    }
}

pub fn helper_text(store: &SessionStore) -> &'static str {
    if store.registration_complete() {
        return COMPLETION_HELPER_TEXT;
    }
    store
        .current_question()
        .and_then(|tag| {
            HELPER_TEXT
                .iter()
                .find(|(key, _)| *key == tag.as_str())
                .map(|(_, text)| *text)
        })
        .unwrap_or(DEFAULT_HELPER_TEXT)
}

fn is_negative(text: &str) -> bool {
    let answer = text.trim();
    NEGATIVE_REPLIES
        .iter()
        .any(|negative| answer.eq_ignore_ascii_case(negative))
}

/// Route a user action against the current store
pub fn route(store: &SessionStore, event: Event) -> Result<RouteResult, RouteError> {
    if let Event::UserText { text } = &event {
        if text.trim().is_empty() {
            return Err(RouteError::EmptyMessage);
        }
    }

    match (input_mode(store), event) {
        // ============================================================
        // Registration finished: yes/no only
        // ============================================================
        (InputMode::Confirmation, Event::UserText { text }) if is_negative(&text) => {
            Ok(RouteResult::new().with_effect(Effect::append_assistant(CLOSING_MESSAGE)))
        }

        (InputMode::Confirmation, Event::UserText { .. }) => {
            Ok(RouteResult::new().with_effect(Effect::ResetSession))
        }

        (InputMode::Confirmation | InputMode::FreeText, Event::QuickReply { .. }) => {
            Err(RouteError::QuickRepliesHidden)
        }

        // ============================================================
        // Dialogue in progress
        // ============================================================
        (InputMode::FreeText | InputMode::QuickReplies, Event::UserText { text }) => {
            Ok(RouteResult::new().with_effect(Effect::send_user_message(text)))
        }

        (InputMode::QuickReplies, Event::QuickReply { choice }) => Ok(RouteResult::new()
            .with_effect(Effect::HideQuickReplies)
            .with_effect(Effect::send_user_message(choice.label()))),
    }
}
