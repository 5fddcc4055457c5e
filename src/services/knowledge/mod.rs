pub mod qna;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::KnowledgeAnswer;

#[async_trait]
pub trait KnowledgeProvider: Send + Sync {
    /// Up to `top` answers in the service's own ranking order.
    async fn query(&self, question: &str, top: usize) -> Result<Vec<KnowledgeAnswer>, AppError>;
}

/// Ask the knowledge base; a failed call yields no answers.
pub async fn ask(provider: &dyn KnowledgeProvider, question: &str, top: usize) -> Vec<KnowledgeAnswer> {
    match provider.query(question, top).await {
        Ok(answers) => answers,
        Err(e) => {
            tracing::error!(error = %e, "knowledge base call failed, treating as no answer");
            Vec::new()
        }
    }
}

/// Confidence of the first-ranked answer, 0 when there is none.
pub fn top_confidence(answers: &[KnowledgeAnswer]) -> f64 {
    answers.first().map(|a| a.confidence).unwrap_or(0.0)
}
