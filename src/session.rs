//! Form handling for a single question: validation, the model call, and
//! turning its result into something the page can show.

use crate::constants::{DEFAULT_CONTEXT, LOW_CONFIDENCE_THRESHOLD};
use crate::model::{Answer, QaError, QaModel};
use tracing::{debug, warn};

/// The two user inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub context: String,
    pub question: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
            question: String::new(),
        }
    }
}

/// A validated form, ready to send to the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query<'a> {
    pub question: &'a str,
    pub context: &'a str,
}

impl Form {
    /// `None` if either field is empty. Whitespace counts as input.
    pub fn validate(&self) -> Option<Query<'_>> {
        if self.context.is_empty() || self.question.is_empty() {
            return None;
        }
        Some(Query {
            question: &self.question,
            context: &self.context,
        })
    }
}

/// What the page shows after a press of the button
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// One of the inputs was empty; the model was not called
    MissingInput,
    Answered { answer: Answer, low_confidence: bool },
    /// The model call failed; the session stays usable
    Failed(String),
}

pub fn is_low_confidence(score: f32) -> bool {
    score < LOW_CONFIDENCE_THRESHOLD
}

/// Turn a model result into an outcome
pub fn classify(result: Result<Answer, QaError>) -> Outcome {
    match result {
        Ok(answer) => {
            let low_confidence = is_low_confidence(answer.score);
            Outcome::Answered {
                answer,
                low_confidence,
            }
        }
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

/// Validate the form and, if it is complete, call the model exactly once.
pub async fn ask(model: &dyn QaModel, form: &Form) -> Outcome {
    let Some(query) = form.validate() else {
        debug!("Missing context or question, model not called");
        return Outcome::MissingInput;
    };

    let outcome = classify(model.answer(query.question, query.context).await);
    if let Outcome::Answered { low_confidence: true, answer } = &outcome {
        warn!(score = answer.score, "Low confidence answer");
    }
    outcome
}

/// Confidence as a percentage with two decimals, e.g. `0.9753` -> `97.53%`
pub fn format_confidence(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::MockQaModel;

    const NOBEL_QUESTION: &str = "When did Einstein win the Nobel Prize?";

    fn form(context: &str, question: &str) -> Form {
        Form {
            context: context.into(),
            question: question.into(),
        }
    }

    #[test]
    fn default_form_has_context_and_empty_question() {
        let form = Form::default();
        assert!(form.context.contains("Nobel Prize in Physics in 1921"));
        assert!(form.question.is_empty());
        assert_eq!(form.validate(), None);
    }

    #[test]
    fn validation_requires_both_fields() {
        assert_eq!(form("", "Who?").validate(), None);
        assert_eq!(form("Some text.", "").validate(), None);
        assert!(form("  \n\t", "Who?").validate().is_some());
        assert!(form("Some text.", "   ").validate().is_some());
        assert_eq!(
            form("Some text.", " Who? ").validate(),
            Some(Query {
                question: " Who? ",
                context: "Some text."
            })
        );
    }

    #[test]
    fn threshold_is_strict() {
        assert!(is_low_confidence(0.0));
        assert!(is_low_confidence(0.4999));
        assert!(!is_low_confidence(0.5));
        assert!(!is_low_confidence(1.0));
    }

    #[test]
    fn classify_flags_low_confidence() {
        let low = classify(Ok(Answer::new("Germany", 0.31, None, None)));
        assert!(matches!(low, Outcome::Answered { low_confidence: true, .. }));

        let high = classify(Ok(Answer::new("Germany", 0.5, None, None)));
        assert!(matches!(high, Outcome::Answered { low_confidence: false, .. }));
    }

    #[test]
    fn classify_keeps_error_message() {
        let outcome = classify(Err(QaError::Unavailable("model is loading".into())));
        assert_eq!(outcome, Outcome::Failed("model unavailable: model is loading".into()));
    }

    #[test]
    fn confidence_formatting() {
        assert_eq!(format_confidence(0.9753), "97.53%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.05), "5.00%");
    }

    #[tokio::test]
    async fn nobel_question_answers_without_warning() {
        let model = MockQaModel::new("mock/qa");
        model.queue_answer(Answer::new("1921", 0.97, Some(223), Some(227)));

        let outcome = ask(&model, &form(DEFAULT_CONTEXT, NOBEL_QUESTION)).await;

        match outcome {
            Outcome::Answered {
                answer,
                low_confidence,
            } => {
                assert_eq!(answer.text, "1921");
                assert!(!low_confidence);
            }
            other => panic!("expected an answer, got {other:?}"),
        }
        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (NOBEL_QUESTION.to_string(), DEFAULT_CONTEXT.to_string()));
    }

    #[tokio::test]
    async fn empty_question_never_reaches_model() {
        let model = MockQaModel::new("mock/qa");
        model.queue_answer(Answer::new("1921", 0.97, None, None));

        assert_eq!(ask(&model, &form(DEFAULT_CONTEXT, "")).await, Outcome::MissingInput);
        assert_eq!(ask(&model, &form("", NOBEL_QUESTION)).await, Outcome::MissingInput);
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn whitespace_question_is_sent_to_model() {
        let model = MockQaModel::new("mock/qa");
        model.queue_answer(Answer::new("", 0.01, None, None));

        let outcome = ask(&model, &form(DEFAULT_CONTEXT, "   ")).await;
        assert!(matches!(outcome, Outcome::Answered { low_confidence: true, .. }));
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.calls.lock().unwrap()[0].0, "   ");
    }

    #[tokio::test]
    async fn model_failure_is_reported_not_swallowed() {
        let model = MockQaModel::new("mock/qa");
        model.queue_error(QaError::Network("connection reset".into()));

        let outcome = ask(&model, &form(DEFAULT_CONTEXT, NOBEL_QUESTION)).await;
        assert_eq!(outcome, Outcome::Failed("network error: connection reset".into()));
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn low_score_is_flagged() {
        let model = MockQaModel::new("mock/qa");
        model.queue_answer(Answer::new("theoretical physics", 0.12, None, None));

        let outcome = ask(&model, &form(DEFAULT_CONTEXT, "What did he like?")).await;
        assert!(matches!(outcome, Outcome::Answered { low_confidence: true, .. }));
    }
}
