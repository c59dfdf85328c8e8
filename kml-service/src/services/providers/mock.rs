//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

type ResponderFn = dyn Fn(&str) -> Result<String, ProviderError> + Send + Sync;

/// Mock text provider for testing.
///
/// Holds a responder closure invoked with the full prompt, so tests can
/// vary the reply per request (e.g., fail only for one batch item).
pub struct MockTextProvider {
    responder: Box<ResponderFn>,
}

impl MockTextProvider {
    pub fn new(
        responder: impl Fn(&str) -> Result<String, ProviderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
        }
    }

    /// A provider that always returns the same reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self::new(move |_| Ok(reply.clone()))
    }

    /// A provider whose every call fails with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |_| Err(ProviderError::ApiError(message.clone())))
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let text = (self.responder)(prompt)?;

        Ok(ProviderResponse {
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: text.len() as i32 / 4,
            text: Some(text),
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
