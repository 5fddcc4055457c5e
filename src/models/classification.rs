use serde::{Deserialize, Serialize};

pub const NONE_INTENT: &str = "None";

/// Entity categories that carry a date/time literal. Matched case-sensitively.
pub const DATETIME_CATEGORIES: [&str; 3] = ["DateTime", "Datetime", "datetimeV2"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub category: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    pub top_intent: String,
    pub score: f64,
    pub entities: Vec<Entity>,
}

impl ClassificationResult {
    /// Sentinel used when the classifier failed or was inconclusive.
    pub fn none() -> Self {
        Self {
            top_intent: NONE_INTENT.to_string(),
            score: 0.0,
            entities: Vec::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.top_intent == NONE_INTENT
    }

    /// First entity, in extraction order, whose category names a date/time.
    pub fn datetime_entity(&self) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| DATETIME_CATEGORIES.contains(&e.category.as_str()))
    }
}
