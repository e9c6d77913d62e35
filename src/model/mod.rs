//! Question-answering model abstraction
//!
//! The span extraction itself happens in an external, pre-trained model.
//! This module only defines the seam to it and the HTTP backend that reaches
//! the hosted inference service.

mod error;
mod hub;
#[cfg(test)]
pub mod mock;

pub use error::QaError;
pub use hub::HubModel;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Extracted answer span returned by the model
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    /// Confidence in `[0, 1]`
    pub score: f32,
    /// Character offsets of the span inside the context, when reported
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Answer {
    /// Build an answer, clamping the score into `[0, 1]` (NaN becomes 0).
    pub fn new(text: impl Into<String>, score: f32, start: Option<usize>, end: Option<usize>) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        Self {
            text: text.into(),
            score,
            start,
            end,
        }
    }
}

/// Common interface for extractive QA backends
#[async_trait]
pub trait QaModel: Send + Sync {
    /// Extract the answer to `question` from `context`
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaError>;

    /// Identifier of the underlying model
    fn model_id(&self) -> &str;
}

/// Where and how to reach the model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_id: String,
    pub inference_url: String,
    pub hub_url: String,
    /// Name of the environment variable holding the API token
    pub token_env: String,
}

impl ModelConfig {
    /// Public page describing the model
    pub fn model_card_url(&self) -> String {
        format!("{}/{}", self.hub_url.trim_end_matches('/'), self.model_id)
    }
}

/// Load the model once for the session.
///
/// Resolves the API token, then checks with the hub that the model exists and
/// is an extractive QA model. Any failure here is fatal to the session.
pub async fn load_model(config: &ModelConfig) -> Result<Arc<dyn QaModel>, QaError> {
    let token = resolve_token(&config.token_env, std::env::var(&config.token_env).ok())?;
    let model = HubModel::new(config, token)?;
    model.verify().await?;
    info!(model = %config.model_id, "Model ready");
    Ok(Arc::new(LoggingModel::new(Arc::new(model))))
}

fn resolve_token(env_name: &str, value: Option<String>) -> Result<String, QaError> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(QaError::MissingToken(env_name.to_string())),
    }
}

/// Logging wrapper for QA models
pub struct LoggingModel {
    inner: Arc<dyn QaModel>,
    model_id: String,
}

impl LoggingModel {
    pub fn new(inner: Arc<dyn QaModel>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl QaModel for LoggingModel {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaError> {
        let start = std::time::Instant::now();
        let result = self.inner.answer(question, context).await;
        let duration = start.elapsed();

        match &result {
            Ok(answer) => {
                info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    context_len = context.len(),
                    score = answer.score,
                    "Answer extracted"
                );
            }
            Err(e) => {
                error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    context_len = context.len(),
                    error = %e,
                    "Answer extraction failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockQaModel;
    use super::*;

    #[test]
    fn score_is_clamped() {
        assert_eq!(Answer::new("a", 1.7, None, None).score, 1.0);
        assert_eq!(Answer::new("a", -0.2, None, None).score, 0.0);
        assert_eq!(Answer::new("a", f32::NAN, None, None).score, 0.0);
        assert_eq!(Answer::new("a", 0.42, None, None).score, 0.42);
    }

    #[test]
    fn blank_token_is_missing() {
        assert_eq!(
            resolve_token("HF_TOKEN", None),
            Err(QaError::MissingToken("HF_TOKEN".into()))
        );
        assert_eq!(
            resolve_token("HF_TOKEN", Some("   ".into())),
            Err(QaError::MissingToken("HF_TOKEN".into()))
        );
        assert_eq!(resolve_token("HF_TOKEN", Some(" hf_abc \n".into())), Ok("hf_abc".into()));
    }

    #[tokio::test]
    async fn logging_wrapper_forwards_results() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_answer(Answer::new("1921", 0.98, Some(191), Some(195)));
        mock.queue_error(QaError::Server("boom".into()));

        let model = LoggingModel::new(mock.clone());
        assert_eq!(model.model_id(), "mock/qa");

        let ok = model.answer("When?", "In 1921.").await;
        assert_eq!(ok, Ok(Answer::new("1921", 0.98, Some(191), Some(195))));

        let err = model.answer("When?", "In 1921.").await;
        assert_eq!(err, Err(QaError::Server("boom".into())));

        assert_eq!(mock.call_count(), 2);
    }
}
