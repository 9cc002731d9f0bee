//! JSON-over-HTTP transport for the hosted chat service

use super::{ChatReply, ChatRequest, ChatTransport, TransportError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// HTTP transport implementation
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            TransportError::invalid_endpoint(format!("Invalid base URL {base_url}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::invalid_endpoint(format!(
                "Base URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn chat_url(&self) -> Url {
        self.endpoint(&["chat"])
    }

    fn session_url(&self, session_id: &str) -> Url {
        self.endpoint(&["sessions", session_id])
    }

    fn classify_send_error(e: &reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::timeout(format!("Request timeout: {e}"))
        } else {
            TransportError::network(format!("Request failed: {e}"))
        }
    }

    fn classify_status(status: StatusCode, body: &str) -> TransportError {
        let detail = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("no body").to_string()
        } else {
            body.trim().to_string()
        };
        TransportError::http(status.as_u16(), format!("HTTP {status}: {detail}"))
    }

    /// Turn a finished `/chat` response into a reply
    fn parse_reply(status: StatusCode, body: &str) -> Result<ChatReply, TransportError> {
        if !status.is_success() {
            return Err(Self::classify_status(status, body));
        }

        serde_json::from_str(body).map_err(|e| {
            TransportError::malformed_reply(format!("Failed to parse reply: {e} - body: {body}"))
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let response = self
            .client
            .post(self.chat_url())
            .json(request)
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {e}")))?;

        Self::parse_reply(status, &body)
    }

    async fn end_session(&self, session_id: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .delete(self.session_url(session_id))
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::classify_status(status, &body))
        }
    }
}
