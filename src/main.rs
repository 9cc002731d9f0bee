//! Sarv - event registration chat client
//!
//! A terminal client driving the Sarv registration dialogue against the
//! remote chat service.

mod config;
mod repl;
mod runtime;
mod session;
mod state_machine;
mod transport;

use config::ClientConfig;
use runtime::Conversation;
use transport::{HttpTransport, LoggingTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stderr, so it never interleaves with the transcript)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sarv_chat=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        base_url = %config.api_base_url,
        timeout_secs = config.timeout.as_secs(),
        welcome = ?config.session.welcome,
        session_ids = ?config.session.session_ids,
        "Starting Sarv chat client"
    );

    let transport = LoggingTransport::new(HttpTransport::new(&config.api_base_url, config.timeout)?);
    let conversation = Conversation::new(config.session, transport);

    repl::run(conversation).await?;

    Ok(())
}
