//! Chat sessions: the symptom-checker conversation and the home-screen
//! support chat.
//!
//! A session owns its message list, a typing flag and a cancellation
//! channel. Replies are produced after a short "thinking" delay that races
//! the cancellation channel, so a reply is only ever appended to the
//! conversation that asked for it. Dropping the `send` future abandons the
//! reply the same way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

use crate::config::DEFAULT_THINKING_DELAY_MS;
use crate::models::enums::Language;
use crate::models::ChatMessage;
use crate::symptoms::messages::{SUPPORT_ACKNOWLEDGEMENT, SUPPORT_WELCOME};
use crate::symptoms::{bot_messages, StaticSymptomChecker, SymptomChecker};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("A reply is already in progress")]
    Busy,
    #[error("Reply cancelled")]
    Cancelled,
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

/// Who answers the user's messages.
#[derive(Clone)]
enum Responder {
    Symptoms(Arc<dyn SymptomChecker>),
    Support,
}

impl Responder {
    fn welcome(&self, language: Language) -> &'static str {
        match self {
            Self::Symptoms(_) => bot_messages(language).welcome,
            Self::Support => SUPPORT_WELCOME,
        }
    }

    fn reply(&self, text: &str, language: Language) -> String {
        match self {
            Self::Symptoms(checker) => checker.check(text, language).text,
            Self::Support => SUPPORT_ACKNOWLEDGEMENT.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Symptoms(_) => "symptom",
            Self::Support => "support",
        }
    }
}

struct SessionState {
    language: Language,
    messages: Vec<ChatMessage>,
}

/// Cancels whatever reply the session is currently waiting on.
///
/// Cheap to clone; cancelling when nothing is pending is a no-op.
#[derive(Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<u64>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
    }
}

/// Clears the typing flag on every exit path of `send`.
struct TypingGuard(Arc<AtomicBool>);

impl Drop for TypingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ChatSession {
    responder: Responder,
    state: Mutex<SessionState>,
    typing: Arc<AtomicBool>,
    thinking_delay: Duration,
    cancel: CancelHandle,
}

impl ChatSession {
    /// Symptom-checker chat backed by the built-in tables.
    pub fn symptom_checker(language: Language) -> Self {
        Self::with_checker(Arc::new(StaticSymptomChecker::new()), language)
    }

    /// Symptom-checker chat backed by a custom checker.
    pub fn with_checker(checker: Arc<dyn SymptomChecker>, language: Language) -> Self {
        Self::new(Responder::Symptoms(checker), language)
    }

    /// Home-screen support chat. Always English.
    pub fn support() -> Self {
        Self::new(Responder::Support, Language::English)
    }

    fn new(responder: Responder, language: Language) -> Self {
        let welcome = ChatMessage::bot(responder.welcome(language));
        let (tx, _rx) = watch::channel(0u64);
        Self {
            responder,
            state: Mutex::new(SessionState {
                language,
                messages: vec![welcome],
            }),
            typing: Arc::new(AtomicBool::new(false)),
            thinking_delay: Duration::from_millis(DEFAULT_THINKING_DELAY_MS),
            cancel: CancelHandle { tx: Arc::new(tx) },
        }
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn thinking_delay(&self) -> Duration {
        self.thinking_delay
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, SessionState>, ChatError> {
        self.state.lock().map_err(|_| ChatError::LockPoisoned)
    }

    pub fn language(&self) -> Result<Language, ChatError> {
        Ok(self.lock_state()?.language)
    }

    /// Snapshot of the conversation, oldest first.
    pub fn messages(&self) -> Result<Vec<ChatMessage>, ChatError> {
        Ok(self.lock_state()?.messages.clone())
    }

    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::Acquire)
    }

    /// Shared view of the typing flag, for indicators that poll it.
    pub fn typing_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.typing)
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Send a user message and wait for the reply.
    ///
    /// Returns `Ok(None)` for blank input, which is ignored. While a reply
    /// is pending further sends fail with `Busy`. A cancelled send keeps
    /// the user message but appends no reply.
    pub async fn send(&self, text: &str) -> Result<Option<ChatMessage>, ChatError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        // Subscribe before claiming the typing flag: a cancel from any point
        // after this line is either seen by `changed()` or by the generation
        // checks made under the state lock.
        let mut cancelled = self.cancel.tx.subscribe();
        let generation = *cancelled.borrow_and_update();

        self.typing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ChatError::Busy)?;
        let _typing = TypingGuard(Arc::clone(&self.typing));

        let language = {
            let mut state = self.lock_state()?;
            if *cancelled.borrow() != generation {
                return Err(ChatError::Cancelled);
            }
            state.messages.push(ChatMessage::user(text));
            state.language
        };

        tracing::debug!(
            chat = self.responder.name(),
            language = %language,
            input_len = text.len(),
            "Chat message received"
        );

        tokio::select! {
            () = tokio::time::sleep(self.thinking_delay) => {}
            _ = cancelled.changed() => {
                tracing::debug!(chat = self.responder.name(), "Pending reply cancelled");
                return Err(ChatError::Cancelled);
            }
        }

        let reply = ChatMessage::bot(self.responder.reply(text, language));
        let mut state = self.lock_state()?;
        // `clear` cancels before it takes the lock, so a reset that raced the
        // reply shows up here.
        if *cancelled.borrow() != generation {
            tracing::debug!(chat = self.responder.name(), "Reply dropped after reset");
            return Err(ChatError::Cancelled);
        }
        state.messages.push(reply.clone());
        Ok(Some(reply))
    }

    /// Reset the conversation to the welcome message. Cancels a pending
    /// reply.
    pub fn clear(&self) -> Result<(), ChatError> {
        self.cancel.cancel();
        let mut state = self.lock_state()?;
        let welcome = ChatMessage::bot(self.responder.welcome(state.language));
        state.messages = vec![welcome];
        Ok(())
    }

    /// Switch language, then clear the conversation.
    pub fn change_language(&self, language: Language) -> Result<(), ChatError> {
        self.lock_state()?.language = language;
        tracing::info!(chat = self.responder.name(), language = %language, "Chat language changed");
        self.clear()
    }
}
