//! Folds a server reply into the session store

use crate::session::{Context, Message, QuestionTag, SessionStore};
use crate::transport::ChatReply;

pub const SUCCESS_MESSAGE: &str = "Your event has been successfully registered!";
pub const REGISTER_ANOTHER_PROMPT: &str =
    "Would you like to register another event? (Type 'yes' or 'no')";

/// Suggestions the server wants the user to pick from.
///
/// Exposed to the front end rather than appended to the transcript; whether
/// to show it is a presentation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPrompt {
    pub suggestions: Vec<String>,
    /// 1-based listing, one suggestion per line
    pub listing: String,
    /// Name the user typed before suggestions were offered
    pub original_name: Option<String>,
}

impl SelectionPrompt {
    fn new(suggestions: Vec<String>, original_name: Option<String>) -> Self {
        let listing = suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| format!("{}. {suggestion}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            suggestions,
            listing,
            original_name,
        }
    }
}

/// What applying a reply produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyOutcome {
    /// Messages appended to the transcript, in order
    pub appended: Vec<Message>,
    pub selection: Option<SelectionPrompt>,
}

/// Apply a successful reply to the store.
///
/// Only ever called with a reply in hand; failed calls never reach here.
pub fn apply(store: &mut SessionStore, reply: ChatReply) -> ReplyOutcome {
    let link = reply.event_link().map(str::to_string);
    let ChatReply {
        message,
        session_id,
        current_question,
        registration_complete,
        suggestions,
        requires_selection,
        context,
        ..
    } = reply;

    store.adopt_reply(session_id, current_question, registration_complete, context);

    if !store.current_question().is_some_and(QuestionTag::is_event_type) {
        store.hide_quick_replies();
    }

    let mut appended = vec![Message::assistant(message)];

    let selection = (requires_selection && !suggestions.is_empty()).then(|| {
        let original_name = store
            .context()
            .and_then(Context::original_name)
            .map(str::to_string);
        SelectionPrompt::new(suggestions, original_name)
    });

    if let Some(link) = link {
        let partner = store.context().and_then(Context::partner_name);
        appended.push(Message::assistant(success_message(&link, partner)));
    }

    if store.registration_complete() {
        appended.push(Message::assistant(REGISTER_ANOTHER_PROMPT));
    }

    for message in &appended {
        store.push_message(message.clone());
    }

    ReplyOutcome {
        appended,
        selection,
    }
}

fn success_message(link: &str, partner: Option<&str>) -> String {
    let mut text = SUCCESS_MESSAGE.to_string();
    if let Some(partner) = partner {
        text.push_str(&format!(" with partner {partner}"));
    }
    text.push_str(&format!("\nYou can access it here: {link}"));
    text
}
