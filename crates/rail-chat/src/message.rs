use std::fmt;

use serde::Serialize;

/// Identifier of one message, unique within its conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Assistant,
}

impl ChatSender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Presentation hint carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessageKind {
    #[default]
    Text,
    Query,
    Alert,
}

impl ChatMessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Query => "query",
            Self::Alert => "alert",
        }
    }
}

/// One immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: ChatSender,
    pub text: String,
    pub created_at_unix_ms: u64,
    pub kind: ChatMessageKind,
}

impl ChatMessage {
    pub fn user(id: MessageId, text: impl Into<String>, created_at_unix_ms: u64) -> Self {
        Self {
            id,
            sender: ChatSender::User,
            text: text.into(),
            created_at_unix_ms,
            kind: ChatMessageKind::Query,
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>, created_at_unix_ms: u64) -> Self {
        Self {
            id,
            sender: ChatSender::Assistant,
            text: text.into(),
            created_at_unix_ms,
            kind: ChatMessageKind::Text,
        }
    }

    pub fn is_from_assistant(&self) -> bool {
        matches!(self.sender, ChatSender::Assistant)
    }

    /// `HH:MM` label shown under the bubble.
    pub fn clock_label(&self) -> String {
        rail_core::format_clock_time_utc(self.created_at_unix_ms)
    }
}
