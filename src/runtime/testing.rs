//! Mock transport for testing
//!
//! Lets the runtime be exercised without a live chat service.

use crate::transport::{ChatReply, ChatRequest, ChatTransport, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock Transport
// ============================================================================

/// Mock transport that returns queued replies
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<ChatReply, TransportError>>>,
    /// Record of all requests made
    requests: Mutex<Vec<ChatRequest>>,
    /// Record of all session teardowns attempted
    ended: Mutex<Vec<String>>,
    fail_end_session: AtomicBool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            ended: Mutex::new(Vec::new()),
            fail_end_session: AtomicBool::new(false),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: ChatReply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    /// Queue a transport failure
    pub fn queue_error(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Make every later `end_session` call fail
    pub fn fail_end_session(&self) {
        self.fail_end_session.store(true, Ordering::SeqCst);
    }

    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn ended_sessions(&self) -> Vec<String> {
        self.ended.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("No mock reply queued")))
    }

    async fn end_session(&self, session_id: &str) -> Result<(), TransportError> {
        self.ended.lock().unwrap().push(session_id.to_string());
        if self.fail_end_session.load(Ordering::SeqCst) {
            Err(TransportError::http(404, "session not found"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportErrorKind;

    fn request(message: &str) -> ChatRequest {
        ChatRequest {
            session_id: None,
            message: message.to_string(),
            current_question: None,
            context: None,
        }
    }

    #[tokio::test]
    async fn test_mock_transport_replays_queue() {
        let mock = MockTransport::new();
        mock.queue_reply(ChatReply::text("Hello"));

        let reply = mock.send_message(&request("")).await.unwrap();
        assert_eq!(reply.message, "Hello");

        // Second call should fail (nothing queued)
        let err = mock.send_message(&request("again")).await.unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::Network);
        assert_eq!(mock.recorded_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_transport_end_session() {
        let mock = MockTransport::new();
        assert!(mock.end_session("a").await.is_ok());
        mock.fail_end_session();
        assert!(mock.end_session("b").await.is_err());
        assert_eq!(mock.ended_sessions(), vec!["a".to_string(), "b".to_string()]);
    }
}
