//! Model error types

use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the question-answering model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QaError {
    #[error("no API token found, set the {0} environment variable")]
    MissingToken(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited: {0}")]
    RateLimit(String),

    /// 503 from the inference service, usually a cold model
    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("model not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("{model} is not an extractive question-answering model (pipeline: {pipeline})")]
    NotQaModel { model: String, pipeline: String },
}

/// Error body returned by the inference service: `{"error": "..."}` or a list of messages
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl QaError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message(body);
        match status {
            401 | 403 => Self::Auth(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimit(message),
            503 => Self::Unavailable(message),
            400..=499 => Self::InvalidRequest(format!("HTTP {status}: {message}")),
            500..=599 => Self::Server(format!("HTTP {status}: {message}")),
            _ => Self::UnexpectedResponse(format!("HTTP {status}: {message}")),
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: ErrorMessage::One(msg) }) => msg,
        Ok(ErrorBody { error: ErrorMessage::Many(msgs) }) => msgs.join("; "),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

impl From<reqwest::Error> for QaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::UnexpectedResponse(e.to_string())
        } else if e.is_connect() {
            Self::Network(format!("connection failed: {e}"))
        } else {
            Self::Network(e.to_string())
        }
    }
}
