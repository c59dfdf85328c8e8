//! KML generation pipeline.
//!
//! Builds a fixed instruction prompt, submits it together with the user's
//! request to a [`TextProvider`], strips markdown fencing from the reply,
//! and validates the result before returning it. The returned KML is the
//! provider's text unchanged apart from fence-stripping and trimming.

use super::providers::{GenerationParams, ProviderError, TextProvider};
use super::validator::{self, KmlIssue};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

/// Lower temperature for consistent, repeatable output.
const TEMPERATURE: f32 = 0.3;

/// Generous but bounded output cap; a tour with many stops fits well
/// within this.
const MAX_OUTPUT_TOKENS: i32 = 4096;

/// Fixed instruction prompt prepended to every user request.
const SYSTEM_PROMPT: &str = r#"You are a KML (Keyhole Markup Language) generation expert for Google Earth and Liquid Galaxy.

CRITICAL: Output ONLY the KML XML code. No explanations, no markdown, no code blocks, no additional text whatsoever.

RULES:
1. XML declaration: <?xml version="1.0" encoding="UTF-8"?>
2. Namespaces: xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2"
3. For fly-to: use gx:Tour with gx:FlyTo for animations
4. Camera elements must include: longitude, latitude, altitude, heading, tilt, roll, altitudeMode
5. Coordinates: latitude [-90, 90], longitude [-180, 180]
6. Defaults: altitude=1000, heading=0, tilt=45, roll=0
7. Escape XML: &, <, >, ", '
8. Multiple stops: use multiple gx:FlyTo elements in sequence
9. Wrap in KML Document tags
10. Output: ONLY valid KML, nothing else

COORDINATES:
- New York: 40.7128, -74.0060
- Eiffel Tower: 48.8584, 2.2945
- Tokyo: 35.6762, 139.6503
- Sydney: -33.8568, 151.2153

Generate ONLY KML. No extra text."#;

/// Failure categories of the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Prompt cannot be empty")]
    InvalidInput,

    #[error("No response from the completion service")]
    UpstreamEmpty,

    #[error("Generated KML failed validation: {0}")]
    ValidationFailed(KmlIssue),

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        match err {
            // The caller's fault.
            GenerateError::InvalidInput => {
                AppError::BadRequest(anyhow::anyhow!("{}", GenerateError::InvalidInput))
            }
            // Upstream and validation failures are all the service's
            // problem; the specific cause goes into the details field.
            other => AppError::InternalError(anyhow::anyhow!("KML generation failed: {}", other)),
        }
    }
}

/// Outcome of a batch run: ordered (query, kml) successes and
/// (query, error message) failures.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: Vec<(String, String)>,
    pub failed: Vec<(String, String)>,
}

/// The generation pipeline. Cheap to clone; the provider handle is shared.
#[derive(Clone)]
pub struct KmlGenerator {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl KmlGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider,
            params: GenerationParams {
                temperature: Some(TEMPERATURE),
                top_p: None,
                max_tokens: Some(MAX_OUTPUT_TOKENS),
            },
        }
    }

    /// Generate one validated KML document from a natural-language prompt.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateError::InvalidInput);
        }

        let full_prompt = format!("{SYSTEM_PROMPT}\n\nUser request: {prompt}");

        let response = self.provider.generate(&full_prompt, &self.params).await?;

        let raw = response.text.unwrap_or_default();
        if raw.is_empty() {
            tracing::warn!(prompt, "Completion service returned an empty reply");
            return Err(GenerateError::UpstreamEmpty);
        }

        let kml = strip_markdown_fences(&raw);

        validator::check_kml(kml).map_err(|issue| {
            tracing::warn!(prompt, %issue, "Generated KML failed validation");
            GenerateError::ValidationFailed(issue)
        })?;

        tracing::info!(
            prompt,
            chars = kml.len(),
            output_tokens = response.output_tokens,
            "KML generated successfully"
        );

        Ok(kml.to_string())
    }

    /// Run the pipeline over a list of queries, isolating per-item
    /// failures. Blank entries are skipped rather than reported.
    pub async fn generate_batch(&self, queries: &[String]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for query in queries {
            let query = query.trim();
            if query.is_empty() {
                continue;
            }

            match self.generate(query).await {
                Ok(kml) => outcome.succeeded.push((query.to_string(), kml)),
                Err(err) => {
                    tracing::warn!(query, error = %err, "Batch item failed");
                    outcome.failed.push((query.to_string(), err.to_string()));
                }
            }
        }

        tracing::info!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "Batch complete"
        );

        outcome
    }
}

/// The completion service sometimes wraps its output in markdown fencing
/// despite instructions not to; strip one leading fence (with or without
/// a language tag) and one trailing fence.
fn strip_markdown_fences(raw: &str) -> &str {
    let mut kml = raw.trim();
    if let Some(rest) = kml.strip_prefix("```xml") {
        kml = rest;
    } else if let Some(rest) = kml.strip_prefix("```") {
        kml = rest;
    }
    if let Some(rest) = kml.strip_suffix("```") {
        kml = rest;
    }
    kml.trim()
}
