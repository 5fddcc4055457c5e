use std::collections::HashSet;
use std::sync::Mutex;

/// Per-conversation "awaiting date/time" flags. Absence means not awaiting.
pub trait ConversationStore: Send + Sync {
    fn is_awaiting_date(&self, conversation_id: &str) -> bool;

    fn set_awaiting_date(&self, conversation_id: &str);

    /// Clear the flag, returning whether it was set. Checking and clearing in
    /// one call lets only one of two overlapping turns consume the slot.
    fn clear_awaiting_date(&self, conversation_id: &str) -> bool;

    /// Conversations currently awaiting a date, sorted.
    fn pending(&self) -> Vec<String>;
}

/// Process-local store; pending slots are lost on restart.
#[derive(Default)]
pub struct InMemoryConversationStore {
    awaiting: Mutex<HashSet<String>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn is_awaiting_date(&self, conversation_id: &str) -> bool {
        self.awaiting
            .lock()
            .map(|set| set.contains(conversation_id))
            .unwrap_or(false)
    }

    fn set_awaiting_date(&self, conversation_id: &str) {
        match self.awaiting.lock() {
            Ok(mut set) => {
                set.insert(conversation_id.to_string());
            }
            Err(e) => tracing::error!(error = %e, "conversation store lock poisoned"),
        }
    }

    fn clear_awaiting_date(&self, conversation_id: &str) -> bool {
        match self.awaiting.lock() {
            Ok(mut set) => set.remove(conversation_id),
            Err(e) => {
                tracing::error!(error = %e, "conversation store lock poisoned");
                false
            }
        }
    }

    fn pending(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .awaiting
            .lock()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_not_awaiting() {
        let store = InMemoryConversationStore::new();
        assert!(!store.is_awaiting_date("conv-1"));
        assert!(!store.clear_awaiting_date("conv-1"));
    }

    #[test]
    fn test_set_then_clear() {
        let store = InMemoryConversationStore::new();
        store.set_awaiting_date("conv-1");
        assert!(store.is_awaiting_date("conv-1"));
        assert!(!store.is_awaiting_date("conv-2"));

        assert!(store.clear_awaiting_date("conv-1"));
        assert!(!store.is_awaiting_date("conv-1"));
        assert!(!store.clear_awaiting_date("conv-1"));
    }

    #[test]
    fn test_single_flag_per_conversation() {
        let store = InMemoryConversationStore::new();
        store.set_awaiting_date("conv-1");
        store.set_awaiting_date("conv-1");
        store.set_awaiting_date("conv-2");
        assert_eq!(store.pending(), vec!["conv-1".to_string(), "conv-2".to_string()]);

        store.clear_awaiting_date("conv-1");
        assert_eq!(store.pending(), vec!["conv-2".to_string()]);
    }
}
