//! The chat log and typing indicator.

use std::time::Duration;

use serde::Serialize;

use fintel_config::AssistantConfig;

use crate::replies::{GREETING, respond};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// A reply chosen by [`AssistantPanel::begin`], waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingReply {
    content: &'static str,
}

impl PendingReply {
    #[must_use]
    pub const fn content(&self) -> &'static str {
        self.content
    }
}

/// Append-only conversation, seeded with a greeting.
#[derive(Debug)]
pub struct AssistantPanel {
    messages: Vec<ChatMessage>,
    typing: bool,
    reply_delay: Duration,
    next_id: u64,
}

impl AssistantPanel {
    #[must_use]
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 1,
                role: Role::Bot,
                content: GREETING.to_string(),
            }],
            typing: false,
            reply_delay,
            next_id: 2,
        }
    }

    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(Duration::from_millis(config.reply_delay_ms))
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.typing
    }

    /// Record the user's message and start typing. Blank input is ignored.
    pub fn begin(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(Role::User, input.to_string());
        self.typing = true;
        Some(PendingReply {
            content: respond(input),
        })
    }

    /// Deliver a pending reply and stop typing.
    pub fn complete(&mut self, reply: PendingReply) -> &ChatMessage {
        self.typing = false;
        self.push(Role::Bot, reply.content.to_string())
    }

    /// `begin`, wait the reply delay, then `complete`.
    pub async fn submit(&mut self, input: &str) -> Option<&ChatMessage> {
        let reply = self.begin(input)?;
        tracing::debug!(delay = ?self.reply_delay, "assistant typing");
        tokio::time::sleep(self.reply_delay).await;
        Some(self.complete(reply))
    }

    fn push(&mut self, role: Role, content: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
        &self.messages[self.messages.len() - 1]
    }
}
