//! Conversation runtime executor

use super::{LOCAL_FIRST_QUESTION, LOCAL_FIRST_QUESTION_WITH_OPTIONS, WELCOME_MESSAGE};
use crate::config::{SessionConfig, WelcomeStrategy};
use crate::session::{Message, QuestionTag, SessionStore};
use crate::state_machine::{
    apply, route, Effect, Event, ReplyOutcome, RouteError, SelectionPrompt,
};
use crate::transport::{ChatRequest, ChatTransport, TransportError};
use thiserror::Error;

/// Errors surfaced to the front end
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("Error communicating with the server: {0}")]
    Transport(#[from] TransportError),
}

/// What one user action (or start) changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Turn {
    /// Messages appended to the transcript, in order
    pub appended: Vec<Message>,
    pub selection: Option<SelectionPrompt>,
    /// The previous session was discarded during this turn
    pub session_reset: bool,
}

impl Turn {
    fn absorb(&mut self, outcome: ReplyOutcome) {
        self.appended.extend(outcome.appended);
        if outcome.selection.is_some() {
            self.selection = outcome.selection;
        }
    }
}

/// A single registration dialogue.
///
/// Every operation takes `&mut self`, so one conversation never has two calls
/// in flight and replies are applied in the order they were requested.
pub struct Conversation<T: ChatTransport> {
    config: SessionConfig,
    transport: T,
    store: SessionStore,
    /// Bumped on every reset so front ends can tell sessions apart
    generation: u64,
}

impl<T: ChatTransport> Conversation<T> {
    pub fn new(config: SessionConfig, transport: T) -> Self {
        let store = SessionStore::fresh(config.new_session_id(), config.quick_replies);
        Self {
            config,
            transport,
            store,
            generation: 0,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Greet the user. Runs at most once per session.
    ///
    /// The session counts as started even if the first round trip fails; the
    /// user retries by typing.
    pub async fn start(&mut self) -> Result<Turn, ConversationError> {
        let mut turn = Turn::default();
        if self.store.started() {
            return Ok(turn);
        }
        self.store.mark_started();
        self.append(&mut turn, Message::assistant(WELCOME_MESSAGE));

        match self.config.welcome {
            WelcomeStrategy::RoundTrip => {
                tracing::info!(session_id = ?self.store.session_id(), "Requesting first question");
                let outcome = self.send(String::new(), None).await?;
                turn.absorb(outcome);
            }
            WelcomeStrategy::Local => {
                self.store.set_current_question(Some(QuestionTag::EventType));
                let question = if self.store.quick_replies_visible() {
                    LOCAL_FIRST_QUESTION_WITH_OPTIONS
                } else {
                    LOCAL_FIRST_QUESTION
                };
                self.append(&mut turn, Message::assistant(question));
            }
        }

        Ok(turn)
    }

    /// Discard the session locally and ask the server to drop its side.
    ///
    /// Teardown is best effort; the local reset happens regardless.
    pub async fn reset(&mut self) {
        if let Some(session_id) = self.store.session_id().map(str::to_string) {
            if let Err(e) = self.transport.end_session(&session_id).await {
                tracing::warn!(%session_id, error = %e, "Ignoring failed session teardown");
            }
        }

        self.store = SessionStore::fresh(self.config.new_session_id(), self.config.quick_replies);
        self.generation += 1;
        tracing::info!(generation = self.generation, "Session reset");
    }

    /// Handle one user action
    pub async fn handle(&mut self, event: Event) -> Result<Turn, ConversationError> {
        let result = route(&self.store, event)?;
        let mut turn = Turn::default();

        for effect in result.effects {
            match effect {
                Effect::AppendMessage(message) => self.append(&mut turn, message),
                Effect::HideQuickReplies => self.store.hide_quick_replies(),
                Effect::SendMessage { text, echo } => {
                    let outcome = self.send(text, echo).await?;
                    turn.absorb(outcome);
                }
                Effect::ResetSession => {
                    self.reset().await;
                    turn = Turn {
                        session_reset: true,
                        ..Turn::default()
                    };
                    let greeting = self.start().await?;
                    turn.absorb(ReplyOutcome {
                        appended: greeting.appended,
                        selection: greeting.selection,
                    });
                }
            }
        }

        Ok(turn)
    }

    fn append(&mut self, turn: &mut Turn, message: Message) {
        self.store.push_message(message.clone());
        turn.appended.push(message);
    }

    /// One round trip. Nothing in the store changes unless it succeeds.
    async fn send(
        &mut self,
        text: String,
        echo: Option<Message>,
    ) -> Result<ReplyOutcome, TransportError> {
        let request = ChatRequest {
            session_id: self.store.session_id().map(str::to_string),
            message: text,
            current_question: self.store.current_question().cloned(),
            context: if self.config.echo_context {
                self.store.context().cloned()
            } else {
                None
            },
        };

        let reply = self.transport.send_message(&request).await?;

        let mut outcome = ReplyOutcome::default();
        if let Some(echo) = echo {
            self.store.push_message(echo.clone());
            outcome.appended.push(echo);
        }
        let applied = apply(&mut self.store, reply);
        outcome.appended.extend(applied.appended);
        outcome.selection = applied.selection;
        Ok(outcome)
    }
}
