//! Transport error types

use thiserror::Error;

/// Transport failure with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Http(status), message)
    }

    pub fn malformed_reply(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::MalformedReply, message)
    }

    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::InvalidEndpoint, message)
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, DNS, reset
    Network,
    /// No reply within the configured timeout
    Timeout,
    /// Non-2xx status
    Http(u16),
    /// 2xx body that is not a usable reply (e.g. no `message`)
    MalformedReply,
    /// Base URL cannot be used to build request URLs
    InvalidEndpoint,
}
