//! Line-oriented terminal front end
//!
//! Renders the transcript from the session store and turns typed lines into
//! conversation events. `/1`..`/N` (or `/workshop` etc.) press the
//! quick-reply buttons.

use crate::runtime::{Conversation, ConversationError, Turn};
use crate::session::{EventType, Message, Role, SessionStore};
use crate::state_machine::{helper_text, input_mode, Event, InputMode};
use crate::transport::{ChatTransport, TransportErrorKind};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const BANNER: &str = "Sarv\nMake your Hackathon Live in 2 minutes!\nBy Where U Elevate\n";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Send(Event),
}

/// Interpret one typed line given what the store currently offers
pub fn parse_command(line: &str, store: &SessionStore) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/exit" => return Command::Quit,
        "/reset" => return Command::Reset,
        _ => {}
    }

    if input_mode(store) == InputMode::QuickReplies {
        if let Some(choice) = trimmed.strip_prefix('/').and_then(button) {
            return Command::Send(Event::quick_reply(choice));
        }
    }

    Command::Send(Event::text(line))
}

/// Resolve a button press by 1-based position or by label
fn button(name: &str) -> Option<EventType> {
    match name.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| EventType::ALL.get(i).copied()),
        Err(_) => EventType::from_label(name),
    }
}

fn render_message(out: &mut impl Write, message: &Message) -> std::io::Result<()> {
    let who = match message.role {
        Role::Assistant => "sarv",
        Role::User => "you",
    };
    writeln!(out, "{who}> {}", message.content)
}

fn render_prompt(out: &mut impl Write, store: &SessionStore) -> std::io::Result<()> {
    if input_mode(store) == InputMode::QuickReplies {
        let buttons: Vec<String> = EventType::ALL
            .iter()
            .enumerate()
            .map(|(i, event_type)| format!("[/{}] {event_type}", i + 1))
            .collect();
        writeln!(out, "  {}", buttons.join("  "))?;
    }
    write!(out, "({}) > ", helper_text(store))?;
    out.flush()
}

/// Tracks how much of the transcript has been printed
struct Renderer {
    generation: u64,
    printed: usize,
}

impl Renderer {
    fn catch_up<T: ChatTransport>(
        &mut self,
        out: &mut impl Write,
        conversation: &Conversation<T>,
    ) -> std::io::Result<()> {
        if conversation.generation() != self.generation {
            self.generation = conversation.generation();
            self.printed = 0;
            writeln!(out, "\n--- new registration ---")?;
        }
        let transcript = conversation.store().transcript();
        for message in transcript.iter().skip(self.printed) {
            render_message(out, message)?;
        }
        self.printed = transcript.len();
        Ok(())
    }
}

fn report(out: &mut impl Write, result: Result<Turn, ConversationError>) -> std::io::Result<()> {
    match result {
        Ok(turn) => {
            if let Some(selection) = turn.selection {
                writeln!(out, "  Suggestions:\n{}", indent(&selection.listing))?;
                if let Some(original) = selection.original_name {
                    writeln!(out, "  Or type 'keep original' to use: {original}")?;
                }
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Turn failed");
            writeln!(out, "  ! {e}")?;
            if retryable(&e) {
                writeln!(out, "  (send your message again to retry)")?;
            }
            Ok(())
        }
    }
}

/// Transport failures a resend may fix; a bad base URL never recovers
fn retryable(error: &ConversationError) -> bool {
    match error {
        ConversationError::Transport(e) => e.kind != TransportErrorKind::InvalidEndpoint,
        ConversationError::Route(_) => false,
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drive a conversation from stdin until EOF or `/quit`
pub async fn run<T: ChatTransport>(mut conversation: Conversation<T>) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    writeln!(out, "{BANNER}")?;

    let mut renderer = Renderer {
        generation: conversation.generation(),
        printed: 0,
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let started = conversation.start().await;
    renderer.catch_up(&mut out, &conversation)?;
    report(&mut out, started)?;

    loop {
        render_prompt(&mut out, conversation.store())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let result = match parse_command(&line, conversation.store()) {
            Command::Quit => break,
            Command::Reset => {
                conversation.reset().await;
                conversation.start().await
            }
            Command::Send(event) => conversation.handle(event).await,
        };

        renderer.catch_up(&mut out, &conversation)?;
        report(&mut out, result)?;
    }

    Ok(())
}
