//! Hosted inference backend (Hugging Face hub + inference router)

use super::{Answer, ModelConfig, QaError, QaModel};
use crate::constants::{APP_VERSION, QA_PIPELINE_TAG};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct HubModel {
    client: Client,
    model_id: String,
    inference_endpoint: String,
    metadata_endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
    options: QaOptions,
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Serialize)]
struct QaOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct RawAnswer {
    answer: String,
    #[serde(default)]
    score: Option<f32>,
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
}

/// The service returns a bare object for top_k = 1 and a list otherwise
#[derive(Deserialize)]
#[serde(untagged)]
enum QaResponse {
    One(RawAnswer),
    Many(Vec<RawAnswer>),
}

#[derive(Deserialize)]
struct ModelInfo {
    #[serde(default)]
    pipeline_tag: Option<String>,
}

impl HubModel {
    pub fn new(config: &ModelConfig, token: String) -> Result<Self, QaError> {
        // No request timeout: a call runs until the service answers or fails.
        let client = Client::builder()
            .user_agent(format!("qa-assistant/{}", APP_VERSION))
            .build()?;

        Ok(Self {
            client,
            model_id: config.model_id.clone(),
            inference_endpoint: endpoint(&config.inference_url, "models", &config.model_id),
            metadata_endpoint: endpoint(&config.hub_url, "api/models", &config.model_id),
            token,
        })
    }

    /// Check the model exists and serves the question-answering pipeline
    pub async fn verify(&self) -> Result<(), QaError> {
        debug!(url = %self.metadata_endpoint, "Fetching model metadata");
        let response = self
            .client
            .get(&self.metadata_endpoint)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(QaError::from_status(status.as_u16(), &body));
        }

        let info: ModelInfo = serde_json::from_str(&body)
            .map_err(|e| QaError::UnexpectedResponse(format!("model metadata: {e}")))?;
        check_pipeline(&self.model_id, info.pipeline_tag.as_deref())
    }
}

#[async_trait]
impl QaModel for HubModel {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaError> {
        let request = QaRequest {
            inputs: QaInputs { question, context },
            options: QaOptions { wait_for_model: true },
        };

        let response = self
            .client
            .post(&self.inference_endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(QaError::from_status(status.as_u16(), &body));
        }

        decode_answer(&body)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

fn endpoint(base: &str, path: &str, model_id: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), path, model_id.trim_matches('/'))
}

fn check_pipeline(model_id: &str, pipeline_tag: Option<&str>) -> Result<(), QaError> {
    match pipeline_tag {
        Some(QA_PIPELINE_TAG) => Ok(()),
        other => Err(QaError::NotQaModel {
            model: model_id.to_string(),
            pipeline: other.unwrap_or("unknown").to_string(),
        }),
    }
}

fn decode_answer(body: &str) -> Result<Answer, QaError> {
    let parsed: QaResponse = serde_json::from_str(body)
        .map_err(|e| QaError::UnexpectedResponse(format!("{e}: {body}")))?;

    let raw = match parsed {
        QaResponse::One(raw) => raw,
        QaResponse::Many(list) => list
            .into_iter()
            .next()
            .ok_or_else(|| QaError::UnexpectedResponse("no answer returned".into()))?,
    };

    Ok(Answer::new(raw.answer, raw.score.unwrap_or(0.0), raw.start, raw.end))
}
