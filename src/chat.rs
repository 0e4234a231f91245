use crate::models::{Message, Sender};
use crate::responder;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Fixed pause before a scripted reply shows up.
pub const THINKING_DELAY: Duration = Duration::from_secs(1);

/// Append-only chat history plus the number of replies still on their way.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: usize,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Blank input is ignored.
    pub fn push_user(&mut self, text: &str, now: DateTime<Utc>) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }
        let message = Message::new(text, Sender::User, now);
        self.messages.push(message.clone());
        Some(message)
    }

    fn begin_reply(&mut self) {
        self.pending += 1;
    }

    pub fn push_assistant(&mut self, text: &str, at: DateTime<Utc>) -> Message {
        let message = Message::new(text, Sender::Assistant, at);
        self.messages.push(message.clone());
        self.pending = self.pending.saturating_sub(1);
        message
    }
}

/// Appends the user's message and schedules the scripted reply. Returns
/// `None` without touching the transcript when `text` is blank.
pub async fn send(state: &AppState, text: &str) -> Option<(Message, JoinHandle<()>)> {
    let message = {
        let mut shell = state.shell.lock().await;
        let transcript = shell.transcript_mut();
        let message = transcript.push_user(text, Utc::now())?;
        transcript.begin_reply();
        message
    };

    info!(id = %message.id, "chat message accepted");
    let handle = schedule_reply(state.clone(), message.text.clone(), message.timestamp);
    Some((message, handle))
}

fn schedule_reply(state: AppState, prompt: String, asked_at: DateTime<Utc>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(THINKING_DELAY).await;

        let text = responder::reply(&prompt, &mut rand::thread_rng());
        let at = Utc::now().max(asked_at + thinking_delay());

        let mut shell = state.shell.lock().await;
        let reply = shell.transcript_mut().push_assistant(text, at);
        debug!(id = %reply.id, "scripted reply appended");
    })
}

fn thinking_delay() -> chrono::Duration {
    chrono::Duration::milliseconds(THINKING_DELAY.as_millis() as i64)
}
