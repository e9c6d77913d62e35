//! Mock model for tests
//!
//! Returns queued results and records every call, so tests can assert
//! exactly how often the model was invoked.

use super::{Answer, QaError, QaModel};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct MockQaModel {
    model_id: String,
    responses: Mutex<VecDeque<Result<Answer, QaError>>>,
    /// (question, context) of every call, in order
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockQaModel {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_answer(&self, answer: Answer) {
        self.responses.lock().unwrap().push_back(Ok(answer));
    }

    pub fn queue_error(&self, error: QaError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QaModel for MockQaModel {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer, QaError> {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), context.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(QaError::Network("no mock response queued".into())))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
