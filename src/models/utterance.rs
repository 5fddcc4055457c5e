use serde::{Deserialize, Serialize};

/// One inbound message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub conversation_id: String,
    pub message_id: String,
    pub sender_id: String,
    pub sender_name: Option<String>,
    pub text: String,
}

impl Utterance {
    /// Trimmed text, or `None` when there is nothing to route.
    pub fn content(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(text: &str) -> Utterance {
        Utterance {
            conversation_id: "conv-1".to_string(),
            message_id: "msg-1".to_string(),
            sender_id: "user-1".to_string(),
            sender_name: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_content_trims() {
        assert_eq!(utterance("  Friday 10am \n").content(), Some("Friday 10am"));
    }

    #[test]
    fn test_whitespace_is_empty() {
        assert_eq!(utterance("").content(), None);
        assert_eq!(utterance(" \t\n").content(), None);
    }
}
