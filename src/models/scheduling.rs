use serde::{Deserialize, Serialize};

pub const DEFAULT_PATIENT_NAME: &str = "patient";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulingRequest {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub name: String,
}

impl SchedulingRequest {
    pub fn new(date_time: &str, name: Option<&str>) -> Self {
        Self {
            date_time: date_time.to_string(),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_PATIENT_NAME)
                .to_string(),
        }
    }
}

/// Booking echo from the scheduler; only `dateTime` is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulingResponse {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(default)]
    pub name: Option<String>,
}
