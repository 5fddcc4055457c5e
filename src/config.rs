use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub clu_endpoint: String,
    pub clu_key: String,
    pub clu_project: String,
    pub clu_deployment: String,
    pub qa_endpoint: String,
    pub qa_key: String,
    pub qa_project: String,
    pub qa_deployment: String,
    pub scheduler_api_url: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            clu_endpoint: env::var("CLU_ENDPOINT").unwrap_or_default(),
            clu_key: env::var("CLU_KEY").unwrap_or_default(),
            clu_project: env::var("CLU_PROJECT").unwrap_or_default(),
            clu_deployment: env::var("CLU_DEPLOYMENT").unwrap_or_default(),
            qa_endpoint: env::var("QA_ENDPOINT").unwrap_or_default(),
            qa_key: env::var("QA_KEY").unwrap_or_default(),
            qa_project: env::var("QA_PROJECT").unwrap_or_default(),
            qa_deployment: env::var("QA_DEPLOYMENT").unwrap_or_default(),
            scheduler_api_url: env::var("SCHEDULER_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Collaborator endpoints are required; keys and project names are passed
    /// through as-is and rejected by the services themselves.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("CLU_ENDPOINT", &self.clu_endpoint),
            ("QA_ENDPOINT", &self.qa_endpoint),
            ("SCHEDULER_API_URL", &self.scheduler_api_url),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}
