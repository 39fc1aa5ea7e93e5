//! The chat assistant screen's message log and simulated replies.
//!
//! Replies are canned text delivered after a delay. Each pending reply is a
//! `DelayedTask`; closing or dropping the assistant aborts them, so a chat
//! that has been left never receives a late message.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tracing::{debug, info};

use carelink_contracts::{
    chat::{ChatMessage, MessageId},
    text::TextKey,
};
use carelink_core::{traits::TranslationProvider, DelayedTask};

type Log = Arc<Mutex<Vec<ChatMessage>>>;

pub struct ChatAssistant {
    log: Log,
    pending: Vec<DelayedTask>,
    reply_delay: Duration,
}

impl ChatAssistant {
    /// Open a conversation seeded with the localized welcome message.
    pub fn open(
        translations: &dyn TranslationProvider,
        language_code: &str,
        reply_delay: Duration,
    ) -> Self {
        let welcome = ChatMessage::assistant(translations.text(language_code, TextKey::ChatWelcome));
        info!(language = language_code, "chat opened");
        Self { log: Arc::new(Mutex::new(vec![welcome])), pending: Vec::new(), reply_delay }
    }

    /// Post a user message and schedule the assistant's reply.
    ///
    /// Blank input is ignored and returns `None`. Must be called inside a
    /// tokio runtime.
    pub fn send(&mut self, text: &str) -> Option<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage::user(text);
        let id = message.id.clone();
        lock(&self.log).push(message);

        self.pending.retain(|task| !task.is_finished());
        let log = Arc::clone(&self.log);
        let reply = canned_reply(text);
        self.pending.push(DelayedTask::spawn("chat-reply", self.reply_delay, move || {
            lock(&log).push(ChatMessage::assistant(reply));
        }));
        debug!(pending = self.pending.len(), "chat reply scheduled");
        Some(id)
    }

    /// Snapshot of the conversation, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.log).clone()
    }

    /// Replies still waiting to be delivered.
    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }

    /// Abort every pending reply. The log keeps what was already delivered.
    pub fn close(&mut self) {
        let aborted = self.pending_replies();
        self.pending.clear();
        if aborted > 0 {
            info!(aborted, "chat closed with replies in flight");
        }
    }
}

impl Drop for ChatAssistant {
    fn drop(&mut self) {
        self.close();
    }
}

fn lock(log: &Log) -> MutexGuard<'_, Vec<ChatMessage>> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The fixed reply every question receives.
pub fn canned_reply(question: &str) -> String {
    format!(
        "Thank you for your question about \"{}\". Based on your symptoms, I recommend \
         consulting with a healthcare professional for proper diagnosis. In the meantime, \
         ensure you stay hydrated and get adequate rest.",
        question
    )
}
