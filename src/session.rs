//! Client-side session store
//!
//! Owns everything the client knows about the current registration dialogue:
//! session identity, the pending question, the transcript and the opaque
//! server context.

mod context;
mod message;
mod question;
mod store;

pub use context::Context;
pub use message::{Message, Role};
pub use question::{EventType, QuestionTag};
pub use store::SessionStore;
