pub mod clu;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{ClassificationResult, Utterance};

#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    /// Run intent/entity analysis. Implementations normalize the upstream
    /// payload; failures are reported as `AppError::ClassificationUnavailable`.
    async fn analyze(&self, utterance: &Utterance) -> Result<ClassificationResult, AppError>;
}

/// Classify an utterance without ever failing the turn: any provider error is
/// logged and replaced by the `"None"` sentinel.
pub async fn classify(
    provider: &dyn ClassifierProvider,
    utterance: &Utterance,
) -> ClassificationResult {
    match provider.analyze(utterance).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(
                error = %e,
                conversation = %utterance.conversation_id,
                "classifier call failed, using sentinel result"
            );
            ClassificationResult::none()
        }
    }
}
