//! Core conversation state machine
//!
//! The router turns user actions into effects and the reducer folds server
//! replies into the session store. Neither performs I/O.

mod effect;
pub mod event;
pub mod reducer;
pub mod router;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use reducer::{apply, ReplyOutcome, SelectionPrompt};
pub use router::{helper_text, input_mode, route, InputMode, RouteError};
