use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeAnswer {
    pub answer: String,
    pub confidence: f64,
}
