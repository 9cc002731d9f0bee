//! Client configuration
//!
//! Everything is read from the environment with a default for each value.
//! Malformed values are reported and replaced by the default rather than
//! aborting start-up.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://utkarsh134-fastapi-hackathonin2mins.hf.space";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How a new session greets the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeStrategy {
    /// Send an empty message so the server asks its first question
    #[default]
    RoundTrip,
    /// Ask the event-type question locally without contacting the server
    Local,
}

impl FromStr for WelcomeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round_trip" | "roundtrip" | "remote" => Ok(Self::RoundTrip),
            "local" => Ok(Self::Local),
            other => Err(format!("unknown welcome strategy: {other}")),
        }
    }
}

/// Where the session id comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionIdStrategy {
    /// Start with no id and adopt whatever the server returns
    #[default]
    Server,
    /// Generate a UUID locally at session start
    Local,
}

impl FromStr for SessionIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "local" => Ok(Self::Local),
            other => Err(format!("unknown session id strategy: {other}")),
        }
    }
}

/// Conversation behaviour switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub welcome: WelcomeStrategy,
    pub session_ids: SessionIdStrategy,
    /// Send the server's context blob back on every call
    pub echo_context: bool,
    /// Offer event-type quick replies
    pub quick_replies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            welcome: WelcomeStrategy::default(),
            session_ids: SessionIdStrategy::default(),
            echo_context: true,
            quick_replies: true,
        }
    }
}

impl SessionConfig {
    /// Session id for a session that is about to start
    pub fn new_session_id(&self) -> Option<String> {
        match self.session_ids {
            SessionIdStrategy::Server => None,
            SessionIdStrategy::Local => Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}

/// Full client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub session: SessionConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session: SessionConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("SARV_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let timeout = parse_or("SARV_TIMEOUT_SECS", &lookup, DEFAULT_TIMEOUT_SECS, |s| {
            s.trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| format!("expected a positive number of seconds, got {s:?}"))
        });

        let session = SessionConfig {
            welcome: parse_or(
                "SARV_WELCOME",
                &lookup,
                defaults.session.welcome,
                WelcomeStrategy::from_str,
            ),
            session_ids: parse_or(
                "SARV_SESSION_IDS",
                &lookup,
                defaults.session.session_ids,
                SessionIdStrategy::from_str,
            ),
            echo_context: parse_or(
                "SARV_ECHO_CONTEXT",
                &lookup,
                defaults.session.echo_context,
                parse_bool,
            ),
            quick_replies: parse_or(
                "SARV_QUICK_REPLIES",
                &lookup,
                defaults.session.quick_replies,
                parse_bool,
            ),
        };

        Self {
            api_base_url,
            timeout: Duration::from_secs(timeout),
            session,
        }
    }
}

fn parse_or<T>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
    parse: impl Fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "Ignoring invalid config value");
            default
        }
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got {other:?}")),
    }
}
