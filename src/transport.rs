//! Transport to the remote registration chat service
//!
//! Provides a common interface so the conversation runtime can run against
//! the real HTTP service or a scripted mock.

mod error;
mod http;
mod types;

pub use error::{TransportError, TransportErrorKind};
pub use http::HttpTransport;
pub use types::{ChatReply, ChatRequest};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for the chat service
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one user turn and wait for the structured reply
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;

    /// Tell the service a session can be discarded
    async fn end_session(&self, session_id: &str) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for Arc<T> {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        (**self).send_message(request).await
    }

    async fn end_session(&self, session_id: &str) -> Result<(), TransportError> {
        (**self).end_session(session_id).await
    }
}

/// Logging wrapper for chat transports
pub struct LoggingTransport<T> {
    inner: T,
}

impl<T: ChatTransport> LoggingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: ChatTransport> ChatTransport for LoggingTransport<T> {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(payload) = serde_json::to_string(request) {
                tracing::debug!(%payload, "Sending chat request");
            }
        }

        let start = std::time::Instant::now();
        let result = self.inner.send_message(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    session_id = reply.session_id.as_deref().unwrap_or("-"),
                    current_question = ?reply.current_question,
                    registration_complete = reply.registration_complete,
                    duration_ms = %duration.as_millis(),
                    "Chat request completed"
                );
                if tracing::enabled!(tracing::Level::DEBUG) {
                    if let Ok(payload) = serde_json::to_string(reply) {
                        tracing::debug!(%payload, "Received chat reply");
                    }
                }
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Chat request failed"
                );
            }
        }

        result
    }

    async fn end_session(&self, session_id: &str) -> Result<(), TransportError> {
        let result = self.inner.end_session(session_id).await;
        match &result {
            Ok(()) => tracing::info!(%session_id, "Remote session ended"),
            Err(e) => tracing::debug!(%session_id, error = %e, "Remote session teardown failed"),
        }
        result
    }
}
