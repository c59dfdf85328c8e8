use crate::services::BatchOutcome;
use serde::{Deserialize, Serialize};

/// Request fields are `Option` so the handlers can distinguish a missing
/// field (client error with a precise message) from a missing or
/// non-JSON body.
#[derive(Debug, Deserialize)]
pub struct GenerateKmlRequest {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateKmlResponse {
    pub kml: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateKmlBatchRequest {
    pub queries: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateKmlBatchResponse {
    pub results: Vec<BatchSuccess>,
    pub failed: Vec<BatchFailure>,
}

#[derive(Debug, Serialize)]
pub struct BatchSuccess {
    pub query: String,
    pub kml: String,
}

#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub query: String,
    pub error: String,
}

impl From<BatchOutcome> for GenerateKmlBatchResponse {
    fn from(outcome: BatchOutcome) -> Self {
        Self {
            results: outcome
                .succeeded
                .into_iter()
                .map(|(query, kml)| BatchSuccess { query, kml })
                .collect(),
            failed: outcome
                .failed
                .into_iter()
                .map(|(query, error)| BatchFailure { query, error })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateKmlRequest {
    pub kml: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateKmlResponse {
    pub valid: bool,
    pub length: usize,
}
