use crate::models::Message;

/// Ordered transcript of one session.
///
/// Value semantics: `append` returns a new store instead of mutating in
/// place, so a reader holding an older snapshot never observes a
/// partially updated transcript. Entries are append-only; the store is
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn append(&self, message: Message) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }

    /// Read-only view of the full transcript.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn append_returns_new_store_and_preserves_order() {
        let empty = ConversationStore::new();
        let one = empty.append(Message::user("first"));
        let two = one.append(Message::assistant("second"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.snapshot()[0].role, Role::User);
        assert_eq!(two.snapshot()[1].content, "second");
    }

    #[test]
    fn older_snapshot_is_unaffected_by_later_appends() {
        let base = ConversationStore::new().append(Message::user("hi"));
        let snapshot: Vec<Message> = base.snapshot().to_vec();
        let _extended = base.append(Message::assistant("there"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(base.len(), 1);
    }
}
