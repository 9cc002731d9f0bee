//! Runtime for executing a conversation
//!
//! Owns the session store and the transport, carries out router effects and
//! runs the session lifecycle (start, reset).

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::{Conversation, ConversationError, Turn};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Sarv! Let's get started with your event registration.";
pub const LOCAL_FIRST_QUESTION: &str = "What type of event would you like to register?";
pub const LOCAL_FIRST_QUESTION_WITH_OPTIONS: &str =
    "What type of event would you like to register? Pick one of the options below or type your own.";
