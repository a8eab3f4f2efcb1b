//! One page-scoped chat surface.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use serde::Serialize;
use thiserror::Error;

use crate::message::{ChatMessage, MessageId};
use crate::message_store::MessageStore;
use crate::profiles::{ConversationKind, ConversationProfile};
use crate::responder::{RandomSource, SimulatedResponder};
use crate::scheduler::{ReplyScheduler, ScheduledReplyHandle};

/// Why a send was refused. A refused send never touches the message store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChatSendError {
    #[error("chat message is empty")]
    EmptyMessage,
    #[error("assistant reply is still pending")]
    ReplyPending,
    #[error("conversation is closed")]
    Closed,
}

/// Result of an accepted send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: MessageId,
    pub reply_ticket: u64,
}

/// Point-in-time copy of a conversation for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSnapshot {
    pub kind: ConversationKind,
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
    pub draft: String,
    pub can_send: bool,
    /// Send control disabled regardless of the draft.
    pub send_locked: bool,
    pub quick_queries: Vec<String>,
    pub closed: bool,
}

struct ConversationState {
    store: MessageStore,
    responder: SimulatedResponder,
    draft: String,
    // `None` until the scheduler hands back the handle for that ticket.
    pending: BTreeMap<u64, Option<ScheduledReplyHandle>>,
    next_message_id: u64,
    next_ticket: u64,
    closed: bool,
}

impl ConversationState {
    fn allocate_message_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }

    fn send_blocked(&self, blocks_while_typing: bool) -> bool {
        self.closed || (blocks_while_typing && !self.pending.is_empty())
    }
}

/// Message store, responder, draft and pending replies of one mounted chat surface.
///
/// Dropping the conversation closes it, which cancels every pending reply.
pub struct Conversation {
    profile: ConversationProfile,
    scheduler: Arc<dyn ReplyScheduler>,
    state: Arc<Mutex<ConversationState>>,
}

impl Conversation {
    /// Opens a conversation seeded with the profile greeting.
    pub fn open(
        profile: ConversationProfile,
        scheduler: Arc<dyn ReplyScheduler>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let greeting = ChatMessage::assistant(
            MessageId::new(1),
            profile.greeting.clone(),
            scheduler.now_unix_ms(),
        );
        let responder = SimulatedResponder::new(profile.policy.clone(), random);
        tracing::debug!(kind = profile.kind.as_str(), "conversation opened");
        Self {
            state: Arc::new(Mutex::new(ConversationState {
                store: MessageStore::seeded(greeting),
                responder,
                draft: String::new(),
                pending: BTreeMap::new(),
                next_message_id: 2,
                next_ticket: 1,
                closed: false,
            })),
            profile,
            scheduler,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ConversationState> {
        lock_conversation_state(&self.state)
    }

    pub fn profile(&self) -> &ConversationProfile {
        &self.profile
    }

    pub fn kind(&self) -> ConversationKind {
        self.profile.kind
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_state().store.messages().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock_state().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().store.is_empty()
    }

    /// True while at least one reply is scheduled and undelivered.
    pub fn is_typing(&self) -> bool {
        let state = self.lock_state();
        !state.closed && !state.pending.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.lock_state().closed
    }

    pub fn draft(&self) -> String {
        self.lock_state().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let mut state = self.lock_state();
        if !state.closed {
            state.draft = text.into();
        }
    }

    /// Copies a quick query into the draft. Returns false for an unknown index.
    pub fn apply_quick_query(&self, index: usize) -> bool {
        match self.profile.quick_queries.get(index) {
            Some(query) => {
                self.set_draft(query.clone());
                true
            }
            None => false,
        }
    }

    /// Whether the send control is enabled for the current draft.
    pub fn can_send(&self) -> bool {
        let state = self.lock_state();
        !state.draft.trim().is_empty() && !state.send_blocked(self.profile.blocks_while_typing)
    }

    /// Replaces the draft with `text` and sends it.
    pub fn send_text(&self, text: &str) -> Result<SendReceipt, ChatSendError> {
        self.set_draft(text);
        self.send()
    }

    /// Appends the draft as a user message and schedules the assistant reply.
    pub fn send(&self) -> Result<SendReceipt, ChatSendError> {
        let (receipt, reply_text, reply_at_unix_ms) = {
            let mut state = self.lock_state();
            if state.closed {
                return Err(ChatSendError::Closed);
            }
            if state.draft.trim().is_empty() {
                return Err(ChatSendError::EmptyMessage);
            }
            if state.send_blocked(self.profile.blocks_while_typing) {
                return Err(ChatSendError::ReplyPending);
            }

            let text = std::mem::take(&mut state.draft);
            let now_unix_ms = self.scheduler.now_unix_ms();
            let message_id = state.allocate_message_id();
            state
                .store
                .append(ChatMessage::user(message_id, text.clone(), now_unix_ms));
            let reply_text = state.responder.reply_to(&text);
            let reply_ticket = state.next_ticket;
            state.next_ticket = state.next_ticket.saturating_add(1);
            state.pending.insert(reply_ticket, None);

            let delay_ms = u64::try_from(self.profile.reply_delay.as_millis()).unwrap_or(u64::MAX);
            (
                SendReceipt {
                    message_id,
                    reply_ticket,
                },
                reply_text,
                now_unix_ms.saturating_add(delay_ms),
            )
        };

        let weak_state = Arc::downgrade(&self.state);
        let kind = self.profile.kind;
        let ticket = receipt.reply_ticket;
        let handle = self.scheduler.schedule(
            self.profile.reply_delay,
            Box::new(move || {
                deliver_reply(&weak_state, kind, ticket, reply_text, reply_at_unix_ms);
            }),
        );

        let mut state = self.lock_state();
        let closed = state.closed;
        match state.pending.get_mut(&ticket) {
            Some(slot) => *slot = Some(handle),
            None if closed => handle.cancel(),
            None => {}
        }
        tracing::debug!(
            kind = kind.as_str(),
            message_id = receipt.message_id.0,
            reply_ticket = ticket,
            "chat reply scheduled"
        );
        Ok(receipt)
    }

    /// Cancels pending replies and refuses further input. Idempotent.
    pub fn close(&self) {
        let handles = {
            let mut state = self.lock_state();
            if state.closed {
                return;
            }
            state.closed = true;
            state.draft.clear();
            std::mem::take(&mut state.pending)
                .into_values()
                .flatten()
                .collect::<Vec<_>>()
        };
        for handle in &handles {
            handle.cancel();
        }
        tracing::debug!(
            kind = self.profile.kind.as_str(),
            cancelled_replies = handles.len(),
            "conversation closed"
        );
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        let state = self.lock_state();
        ConversationSnapshot {
            kind: self.profile.kind,
            messages: state.store.messages().to_vec(),
            typing: !state.closed && !state.pending.is_empty(),
            draft: state.draft.clone(),
            can_send: !state.draft.trim().is_empty()
                && !state.send_blocked(self.profile.blocks_while_typing),
            send_locked: state.send_blocked(self.profile.blocks_while_typing),
            quick_queries: self.profile.quick_queries.clone(),
            closed: state.closed,
        }
    }
}

impl Drop for Conversation {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("Conversation")
            .field("kind", &self.profile.kind)
            .field("messages", &state.store.len())
            .field("pending", &state.pending.len())
            .field("closed", &state.closed)
            .finish()
    }
}

fn lock_conversation_state(state: &Mutex<ConversationState>) -> MutexGuard<'_, ConversationState> {
    state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn deliver_reply(
    weak_state: &Weak<Mutex<ConversationState>>,
    kind: ConversationKind,
    ticket: u64,
    text: String,
    created_at_unix_ms: u64,
) {
    let Some(state) = weak_state.upgrade() else {
        tracing::debug!(
            kind = kind.as_str(),
            reply_ticket = ticket,
            "chat reply discarded: conversation dropped"
        );
        return;
    };
    let mut state = lock_conversation_state(&state);
    if state.closed || state.pending.remove(&ticket).is_none() {
        tracing::debug!(
            kind = kind.as_str(),
            reply_ticket = ticket,
            "chat reply discarded: conversation closed"
        );
        return;
    }
    let message_id = state.allocate_message_id();
    state
        .store
        .append(ChatMessage::assistant(message_id, text, created_at_unix_ms));
    tracing::debug!(
        kind = kind.as_str(),
        reply_ticket = ticket,
        message_id = message_id.0,
        "chat reply delivered"
    );
}
