use crate::message::ChatMessage;

/// Append-only, insertion-ordered message list for one conversation.
///
/// There is no removal or reordering API: display order is creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    /// Creates a store seeded with its greeting.
    pub fn seeded(greeting: ChatMessage) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::MessageStore;
    use crate::message::{ChatMessage, MessageId};

    #[test]
    fn unit_seeded_store_starts_with_single_greeting() {
        let store = MessageStore::seeded(ChatMessage::assistant(MessageId::new(1), "hi", 0));
        assert_eq!(store.len(), 1);
        assert!(store.messages()[0].is_from_assistant());
    }

    #[test]
    fn functional_append_preserves_call_order() {
        let mut store = MessageStore::default();
        for index in 1..=12_u64 {
            store.append(ChatMessage::user(
                MessageId::new(index),
                format!("message {}", 13 - index),
                1_000 - index,
            ));
        }
        let ids = store
            .messages()
            .iter()
            .map(|message| message.id.0)
            .collect::<Vec<_>>();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn regression_identical_texts_are_kept_as_distinct_messages() {
        let mut store = MessageStore::default();
        store.append(ChatMessage::user(MessageId::new(1), "same", 5));
        store.append(ChatMessage::user(MessageId::new(2), "same", 5));
        assert_eq!(store.len(), 2);
        assert_eq!(store.last().map(|message| message.id), Some(MessageId::new(2)));
    }
}
