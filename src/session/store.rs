//! The single mutable record behind a conversation

use super::{Context, Message, QuestionTag};

/// Identity and progress of one server-side conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// `None` until assigned locally or echoed by the server
    pub session_id: Option<String>,
    /// `None` means the server has not asked anything yet, or the dialogue
    /// reached a terminal step
    pub current_question: Option<QuestionTag>,
    pub registration_complete: bool,
}

/// Session state plus transcript.
///
/// Fields are private: readers go through accessors, and only the reducer and
/// the lifecycle controller in this crate hold the mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    session: Session,
    transcript: Vec<Message>,
    context: Option<Context>,
    show_quick_replies: bool,
    started: bool,
}

impl SessionStore {
    /// A brand-new session with an empty transcript
    pub fn fresh(session_id: Option<String>, quick_replies: bool) -> Self {
        Self {
            session: Session {
                session_id,
                current_question: None,
                registration_complete: false,
            },
            transcript: Vec::new(),
            context: None,
            show_quick_replies: quick_replies,
            started: false,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.session_id.as_deref()
    }

    pub fn current_question(&self) -> Option<&QuestionTag> {
        self.session.current_question.as_ref()
    }

    pub fn registration_complete(&self) -> bool {
        self.session.registration_complete
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Raw visibility flag, independent of the current question
    #[cfg(test)]
    pub fn quick_replies_enabled(&self) -> bool {
        self.show_quick_replies
    }

    /// Whether the quick-reply buttons should be offered right now
    pub fn quick_replies_visible(&self) -> bool {
        self.show_quick_replies
            && !self.session.registration_complete
            && self
                .session
                .current_question
                .as_ref()
                .is_some_and(QuestionTag::is_event_type)
    }

    // ------------------------------------------------------------------
    // Mutators (reducer and lifecycle controller only)
    // ------------------------------------------------------------------

    pub(crate) fn push_message(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Adopt the authoritative fields of a server reply.
    ///
    /// A reply without a session id keeps the current one so later calls stay
    /// attached to the same conversation.
    pub(crate) fn adopt_reply(
        &mut self,
        session_id: Option<String>,
        current_question: Option<QuestionTag>,
        registration_complete: bool,
        context: Option<Context>,
    ) {
        if let Some(id) = session_id {
            self.session.session_id = Some(id);
        }
        self.session.current_question = current_question;
        self.session.registration_complete = registration_complete;
        self.context = context;
    }

    pub(crate) fn set_current_question(&mut self, question: Option<QuestionTag>) {
        self.session.current_question = question;
    }

    /// One-way: once hidden, quick replies stay hidden for this session
    pub(crate) fn hide_quick_replies(&mut self) {
        self.show_quick_replies = false;
    }

    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }
}
