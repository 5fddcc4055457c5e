use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::KnowledgeProvider;
use crate::errors::AppError;
use crate::models::KnowledgeAnswer;

const API_VERSION: &str = "2021-10-01";

/// Azure Custom Question Answering client.
pub struct QnaKnowledgeBase {
    endpoint: String,
    key: String,
    project: String,
    deployment: String,
    client: reqwest::Client,
}

impl QnaKnowledgeBase {
    pub fn new(
        endpoint: String,
        key: String,
        project: String,
        deployment: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build knowledge base HTTP client")?;
        Ok(Self {
            endpoint,
            key,
            project,
            deployment,
            client,
        })
    }

    async fn request(&self, question: &str, top: usize) -> anyhow::Result<Vec<KnowledgeAnswer>> {
        let url = format!(
            "{}/language/:query-knowledgebases",
            self.endpoint.trim_end_matches('/')
        );

        let resp = self
            .client
            .post(&url)
            .query(&[
                ("api-version", API_VERSION),
                ("projectName", self.project.as_str()),
                ("deploymentName", self.deployment.as_str()),
            ])
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .json(&json!({ "question": question, "top": top }))
            .send()
            .await
            .context("failed to call question answering API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse question answering response")?;

        if !status.is_success() {
            anyhow::bail!("question answering API error ({}): {}", status, data);
        }

        parse_answers(&data)
    }
}

#[async_trait]
impl KnowledgeProvider for QnaKnowledgeBase {
    async fn query(&self, question: &str, top: usize) -> Result<Vec<KnowledgeAnswer>, AppError> {
        self.request(question, top)
            .await
            .map_err(|e| AppError::KnowledgeUnavailable(format!("{e:#}")))
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    answers: Vec<WireAnswer>,
}

#[derive(Deserialize)]
struct WireAnswer {
    #[serde(default)]
    answer: String,
    #[serde(rename = "confidenceScore", default)]
    confidence_score: Option<f64>,
    #[serde(default)]
    confidence: Option<f64>,
}

fn parse_answers(data: &serde_json::Value) -> anyhow::Result<Vec<KnowledgeAnswer>> {
    let parsed: QueryResponse = serde_json::from_value(data.clone())
        .context("unexpected question answering response shape")?;

    Ok(parsed
        .answers
        .into_iter()
        .map(|a| KnowledgeAnswer {
            answer: a.answer,
            confidence: a
                .confidence_score
                .or(a.confidence)
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
        })
        .collect())
}
