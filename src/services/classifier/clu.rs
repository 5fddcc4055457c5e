use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::ClassifierProvider;
use crate::errors::AppError;
use crate::models::{ClassificationResult, Entity, Utterance, NONE_INTENT};

const API_VERSION: &str = "2022-10-01-preview";

/// Azure Conversational Language Understanding client.
pub struct CluClassifier {
    endpoint: String,
    key: String,
    project: String,
    deployment: String,
    client: reqwest::Client,
}

impl CluClassifier {
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
            .context("failed to build CLU HTTP client")?;
        Ok(Self {
            endpoint,
            key,
            project,
            deployment,
            client,
        })
    }

    async fn request(&self, utterance: &Utterance) -> anyhow::Result<ClassificationResult> {
        let body = json!({
            "kind": "Conversation",
            "analysisInput": {
                "conversationItem": {
                    "id": utterance.message_id,
                    "participantId": utterance.sender_id,
                    "text": utterance.text.trim(),
                }
            },
            "parameters": {
                "projectName": self.project,
                "deploymentName": self.deployment,
                "verbose": true,
            }
        });

        let url = format!(
            "{}/language/:analyze-conversations",
            self.endpoint.trim_end_matches('/')
        );

        let resp = self
            .client
            .post(&url)
            .query(&[("api-version", API_VERSION)])
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .json(&body)
            .send()
            .await
            .context("failed to call CLU API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse CLU response")?;

        if !status.is_success() {
            anyhow::bail!("CLU API error ({}): {}", status, data);
        }

        parse_prediction(&data)
    }
}

#[async_trait]
impl ClassifierProvider for CluClassifier {
    async fn analyze(&self, utterance: &Utterance) -> Result<ClassificationResult, AppError> {
        self.request(utterance)
            .await
            .map_err(|e| AppError::ClassificationUnavailable(format!("{e:#}")))
    }
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    result: AnalyzeResult,
}

#[derive(Deserialize)]
struct AnalyzeResult {
    prediction: Prediction,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    top_intent: Option<String>,
    #[serde(default)]
    intents: Option<IntentScores>,
    #[serde(default)]
    entities: Vec<WireEntity>,
}

/// CLU returns per-intent scores either as a list of records or as an object
/// keyed by intent name, depending on project kind.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntentScores {
    List(Vec<IntentRecord>),
    Keyed(HashMap<String, IntentScore>),
}

#[derive(Deserialize)]
struct IntentRecord {
    category: String,
    #[serde(flatten)]
    score: IntentScore,
}

#[derive(Deserialize)]
struct IntentScore {
    #[serde(rename = "confidenceScore", default)]
    confidence_score: Option<f64>,
    #[serde(default)]
    confidence: Option<f64>,
}

impl IntentScore {
    fn value(&self) -> f64 {
        self.confidence_score.or(self.confidence).unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct WireEntity {
    category: String,
    text: String,
}

impl IntentScores {
    fn score_for(&self, intent: &str) -> f64 {
        match self {
            IntentScores::List(records) => records
                .iter()
                .find(|r| r.category.trim() == intent)
                .map(|r| r.score.value())
                .unwrap_or(0.0),
            IntentScores::Keyed(scores) => {
                scores.get(intent).map(IntentScore::value).unwrap_or(0.0)
            }
        }
    }
}

fn parse_prediction(data: &serde_json::Value) -> anyhow::Result<ClassificationResult> {
    let parsed: AnalyzeResponse =
        serde_json::from_value(data.clone()).context("unexpected CLU response shape")?;
    let prediction = parsed.result.prediction;

    let top_intent = prediction
        .top_intent
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(NONE_INTENT)
        .to_string();

    let score = prediction
        .intents
        .as_ref()
        .map(|scores| scores.score_for(&top_intent))
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let entities = prediction
        .entities
        .into_iter()
        .map(|e| Entity {
            category: e.category,
            text: e.text,
        })
        .collect();

    Ok(ClassificationResult {
        top_intent,
        score,
        entities,
    })
}
