//! Page-scoped chat conversations for the RailFlow dashboard.
//!
//! A conversation owns an append-only message store, a simulated responder
//! that picks canned replies, and the pending replies it has scheduled. Reply
//! latency goes through [`ReplyScheduler`] so hosts can run on tokio timers
//! while tests drive virtual time.

pub mod conversation;
pub mod message;
pub mod message_store;
pub mod profiles;
pub mod responder;
pub mod scheduler;

pub use conversation::{ChatSendError, Conversation, ConversationSnapshot, SendReceipt};
pub use message::{ChatMessage, ChatMessageKind, ChatSender, MessageId};
pub use message_store::MessageStore;
pub use profiles::{ConversationKind, ConversationProfile};
pub use responder::{
    FallbackReply, KeywordRule, RandomSource, ResponsePolicy, SeededRandomSource,
    SimulatedResponder,
};
pub use scheduler::{
    ManualReplyScheduler, ReplyScheduler, ScheduledReply, ScheduledReplyHandle,
    TokioReplyScheduler,
};
