//! Line-oriented front-end for the symptom-checker chat.
//!
//! Reads one message per line. Lines starting with `/` are commands:
//! `/lang <code>`, `/clear`, `/history`, `/help`, `/quit`.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::chat::{ChatError, ChatSession};
use crate::models::enums::{Language, MessageRole};
use crate::models::ChatMessage;
use crate::symptoms::format::strip_emphasis;
use crate::symptoms::{bot_messages, script};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Chat failed: {0}")]
    Chat(#[from] ChatError),
}

const HELP: &str = "Commands: /lang <en|hi|pa>  /clear  /history  /help  /quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Message(String),
    Blank,
    SetLanguage(String),
    Clear,
    History,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Blank;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Message(trimmed.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "exit"), _) => Command::Quit,
        (Some("clear"), _) => Command::Clear,
        (Some("history"), _) => Command::History,
        (Some("help"), _) => Command::Help,
        (Some("lang"), Some(code)) => Command::SetLanguage(code.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn write_message<W: Write>(out: &mut W, message: &ChatMessage) -> std::io::Result<()> {
    let speaker = match message.role {
        MessageRole::User => "you",
        MessageRole::Bot => "bot",
    };
    writeln!(out, "[{}] {speaker}:", message.timestamp.format("%H:%M"))?;
    for line in message.content.lines() {
        writeln!(out, "  {}", strip_emphasis(line))?;
    }
    Ok(())
}

/// Drive `session` from `input` until end of input or `/quit`.
pub async fn run_console<R, W>(
    session: &ChatSession,
    input: R,
    mut output: W,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
{
    if let Some(welcome) = session.messages()?.first() {
        write_message(&mut output, welcome)?;
    }
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let language = session.language()?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Blank => {
                writeln!(output, "{}", bot_messages(language).no_symptom)?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Unknown(cmd) => writeln!(output, "Unknown command: {cmd}\n{HELP}")?,
            Command::Clear => {
                session.clear()?;
                if let Some(welcome) = session.messages()?.first() {
                    write_message(&mut output, welcome)?;
                }
            }
            Command::History => {
                for message in session.messages()? {
                    write_message(&mut output, &message)?;
                }
            }
            Command::SetLanguage(code) => match code.parse::<Language>() {
                Ok(new_language) => {
                    session.change_language(new_language)?;
                    writeln!(output, "Language: {}", new_language.native_name())?;
                    if let Some(welcome) = session.messages()?.first() {
                        write_message(&mut output, welcome)?;
                    }
                }
                Err(_) => writeln!(output, "Unknown language: {code} (use en, hi or pa)")?,
            },
            Command::Message(text) => {
                writeln!(output, "{}", bot_messages(language).typing)?;
                output.flush()?;
                match session.send(&text).await {
                    Ok(Some(reply)) => write_message(&mut output, &reply)?,
                    Ok(None) => {}
                    Err(ChatError::Cancelled) => writeln!(output, "(reply cancelled)")?,
                    Err(e) => return Err(e.into()),
                }
                if let Some(other) = script::suggest_language(&text, language) {
                    writeln!(
                        output,
                        "Tip: that looks like {}. Switch with /lang {}",
                        other.native_name(),
                        other.as_str()
                    )?;
                }
            }
        }
        output.flush()?;
    }

    tracing::debug!("Console input closed");
    Ok(())
}
