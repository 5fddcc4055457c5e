pub mod http;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{SchedulingRequest, SchedulingResponse};

/// Appointment scheduling API. Implementations pass failures straight through
/// as `AppError::SchedulerUnavailable`; the caller decides how to reply.
#[async_trait]
pub trait SchedulerProvider: Send + Sync {
    async fn availability(&self) -> Result<Vec<String>, AppError>;

    async fn book(&self, request: &SchedulingRequest) -> Result<SchedulingResponse, AppError>;
}
