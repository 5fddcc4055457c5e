use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::SchedulerProvider;
use crate::errors::AppError;
use crate::models::{SchedulingRequest, SchedulingResponse};

pub struct HttpScheduler {
    base_url: String,
    client: reqwest::Client,
}

impl HttpScheduler {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build scheduler HTTP client")?;
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_availability(&self) -> anyhow::Result<Vec<String>> {
        self.client
            .get(self.url("availability"))
            .send()
            .await
            .context("failed to call scheduler availability")?
            .error_for_status()
            .context("scheduler availability returned error")?
            .json()
            .await
            .context("failed to parse availability response")
    }

    async fn post_booking(&self, request: &SchedulingRequest) -> anyhow::Result<SchedulingResponse> {
        self.client
            .post(self.url("schedule"))
            .json(request)
            .send()
            .await
            .context("failed to call scheduler booking")?
            .error_for_status()
            .context("scheduler booking returned error")?
            .json()
            .await
            .context("failed to parse booking response")
    }
}

#[async_trait]
impl SchedulerProvider for HttpScheduler {
    async fn availability(&self) -> Result<Vec<String>, AppError> {
        self.fetch_availability()
            .await
            .map_err(|e| AppError::SchedulerUnavailable(format!("{e:#}")))
    }

    async fn book(&self, request: &SchedulingRequest) -> Result<SchedulingResponse, AppError> {
        self.post_booking(request)
            .await
            .map_err(|e| AppError::SchedulerUnavailable(format!("{e:#}")))
    }
}
