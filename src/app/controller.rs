//! Model loading and question dispatch
//!
//! Both run on the app's tokio runtime and report back through shared state,
//! requesting a repaint when they finish so the next frame picks them up.

use crate::model::{QaError, QaModel};
use crate::session::{self, Form, Outcome};
use crate::types::{AskState, ModelStatus};
use eframe::egui;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Controller {
    model_status: Arc<Mutex<ModelStatus>>,
    ask_state: Arc<Mutex<AskState>>,
    /// Bumped on every edit; a call finishing under an older value is stale
    input_generation: Arc<AtomicU64>,
    load_started: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            model_status: Arc::new(Mutex::new(ModelStatus::Loading)),
            ask_state: Arc::new(Mutex::new(AskState::Idle)),
            input_generation: Arc::new(AtomicU64::new(0)),
            load_started: false,
        }
    }
}

impl Controller {
    /// Run the model loader once. Later calls are no-ops.
    pub fn start_model_load<F>(
        &mut self,
        runtime: &Handle,
        ctx: &egui::Context,
        loader: F,
    ) -> Option<JoinHandle<()>>
    where
        F: Future<Output = Result<Arc<dyn QaModel>, QaError>> + Send + 'static,
    {
        if self.load_started {
            return None;
        }
        self.load_started = true;

        let status = self.model_status.clone();
        let ctx = ctx.clone();
        Some(runtime.spawn(async move {
            let next = match loader.await {
                Ok(model) => {
                    info!(model = model.model_id(), "Model loaded");
                    ModelStatus::Ready(model)
                }
                Err(e) => {
                    error!(error = %e, "Failed to load model");
                    ModelStatus::Failed(e.to_string())
                }
            };
            *lock(&status) = next;
            ctx.request_repaint();
        }))
    }

    /// Handle a press of the button.
    ///
    /// Does nothing unless the model is ready and no question is in flight.
    /// Missing input is answered immediately; otherwise exactly one model call
    /// is spawned.
    pub fn submit(&self, runtime: &Handle, ctx: &egui::Context, form: &Form) -> Option<JoinHandle<()>> {
        let model = match &*lock(&self.model_status) {
            ModelStatus::Ready(model) => model.clone(),
            _ => {
                debug!("Submit ignored, model not ready");
                return None;
            }
        };

        {
            let mut state = lock(&self.ask_state);
            if state.is_pending() {
                debug!("Submit ignored, question already in flight");
                return None;
            }
            if form.validate().is_none() {
                info!("Missing context or question");
                *state = AskState::done(Outcome::MissingInput);
                return None;
            }
            *state = AskState::Pending;
        }

        info!(
            question_len = form.question.len(),
            context_len = form.context.len(),
            "Asking model"
        );

        let form = form.clone();
        let state = self.ask_state.clone();
        let generation = self.input_generation.clone();
        let asked_at = generation.load(Ordering::SeqCst);
        let ctx = ctx.clone();
        Some(runtime.spawn(async move {
            let outcome = session::ask(model.as_ref(), &form).await;
            let mut state = lock(&state);
            if generation.load(Ordering::SeqCst) == asked_at {
                *state = AskState::done(outcome);
            } else {
                debug!("Inputs changed while asking, result dropped");
                *state = AskState::Idle;
            }
            drop(state);
            ctx.request_repaint();
        }))
    }

    /// The inputs were edited: forget the last result, and drop the one in
    /// flight when it arrives.
    pub fn discard_result(&self) {
        self.input_generation.fetch_add(1, Ordering::SeqCst);
        let mut state = lock(&self.ask_state);
        if matches!(*state, AskState::Done { .. }) {
            *state = AskState::Idle;
        }
    }

    pub fn model_status(&self) -> ModelStatus {
        lock(&self.model_status).clone()
    }

    pub fn ask_state(&self) -> AskState {
        lock(&self.ask_state).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CONTEXT;
    use crate::model::mock::MockQaModel;
    use crate::model::Answer;

    fn nobel_form() -> Form {
        Form {
            context: DEFAULT_CONTEXT.into(),
            question: "When did Einstein win the Nobel Prize?".into(),
        }
    }

    async fn ready_controller(mock: Arc<MockQaModel>) -> Controller {
        let mut controller = Controller::default();
        let ctx = egui::Context::default();
        let model: Arc<dyn QaModel> = mock;
        controller
            .start_model_load(&Handle::current(), &ctx, async move { Ok(model) })
            .unwrap()
            .await
            .unwrap();
        controller
    }

    #[tokio::test]
    async fn load_success_makes_model_ready() {
        let controller = ready_controller(Arc::new(MockQaModel::new("mock/qa"))).await;
        match controller.model_status() {
            ModelStatus::Ready(model) => assert_eq!(model.model_id(), "mock/qa"),
            _ => panic!("model should be ready"),
        }
    }

    #[tokio::test]
    async fn loader_runs_once() {
        let mut controller = Controller::default();
        let ctx = egui::Context::default();
        let first = controller.start_model_load(&Handle::current(), &ctx, async {
            Err(QaError::MissingToken("HF_TOKEN".into()))
        });
        let second = controller.start_model_load(&Handle::current(), &ctx, async {
            Err(QaError::MissingToken("HF_TOKEN".into()))
        });
        assert!(first.is_some());
        assert!(second.is_none());
        first.unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn load_failure_blocks_the_form() {
        let mut controller = Controller::default();
        let ctx = egui::Context::default();
        controller
            .start_model_load(&Handle::current(), &ctx, async {
                Err(QaError::NotFound("Repository not found".into()))
            })
            .unwrap()
            .await
            .unwrap();

        match controller.model_status() {
            ModelStatus::Failed(msg) => assert_eq!(msg, "model not found: Repository not found"),
            _ => panic!("model load should have failed"),
        }
        assert!(controller.submit(&Handle::current(), &ctx, &nobel_form()).is_none());
        assert_eq!(controller.ask_state(), AskState::Idle);
    }

    #[tokio::test]
    async fn submit_before_load_is_ignored() {
        let controller = Controller::default();
        let ctx = egui::Context::default();
        assert!(controller.submit(&Handle::current(), &ctx, &nobel_form()).is_none());
        assert_eq!(controller.ask_state(), AskState::Idle);
    }

    #[tokio::test]
    async fn one_press_one_call() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_answer(Answer::new("1921", 0.97, None, None));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();

        let task = controller.submit(&Handle::current(), &ctx, &nobel_form()).unwrap();
        task.await.unwrap();

        assert_eq!(mock.call_count(), 1);
        match controller.ask_state() {
            AskState::Done {
                outcome: Outcome::Answered { answer, low_confidence },
                ..
            } => {
                assert_eq!(answer.text, "1921");
                assert!(!low_confidence);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_question_warns_without_calling() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();
        let form = Form {
            question: String::new(),
            ..nobel_form()
        };

        assert!(controller.submit(&Handle::current(), &ctx, &form).is_none());
        assert!(matches!(
            controller.ask_state(),
            AskState::Done { outcome: Outcome::MissingInput, .. }
        ));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn failure_keeps_session_usable() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_error(QaError::Server("HTTP 500: internal".into()));
        mock.queue_answer(Answer::new("1879", 0.42, None, None));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();

        controller
            .submit(&Handle::current(), &ctx, &nobel_form())
            .unwrap()
            .await
            .unwrap();
        assert!(matches!(
            controller.ask_state(),
            AskState::Done { outcome: Outcome::Failed(_), .. }
        ));

        controller
            .submit(&Handle::current(), &ctx, &nobel_form())
            .unwrap()
            .await
            .unwrap();
        assert!(matches!(
            controller.ask_state(),
            AskState::Done {
                outcome: Outcome::Answered { low_confidence: true, .. },
                ..
            }
        ));
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn press_while_pending_is_ignored() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_answer(Answer::new("1921", 0.97, None, None));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();

        // Current-thread test runtime: the spawned call cannot start until we await it.
        let task = controller.submit(&Handle::current(), &ctx, &nobel_form()).unwrap();
        assert!(controller.ask_state().is_pending());
        assert!(controller.submit(&Handle::current(), &ctx, &nobel_form()).is_none());

        task.await.unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn editing_clears_shown_result() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_answer(Answer::new("1921", 0.97, None, None));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();

        controller
            .submit(&Handle::current(), &ctx, &nobel_form())
            .unwrap()
            .await
            .unwrap();
        assert!(matches!(controller.ask_state(), AskState::Done { .. }));

        controller.discard_result();
        assert_eq!(controller.ask_state(), AskState::Idle);
    }

    #[tokio::test]
    async fn editing_while_pending_drops_stale_answer() {
        let mock = Arc::new(MockQaModel::new("mock/qa"));
        mock.queue_answer(Answer::new("1921", 0.97, None, None));
        let controller = ready_controller(mock.clone()).await;
        let ctx = egui::Context::default();

        let task = controller.submit(&Handle::current(), &ctx, &nobel_form()).unwrap();
        controller.discard_result();
        assert!(controller.ask_state().is_pending());

        task.await.unwrap();
        assert_eq!(controller.ask_state(), AskState::Idle);
        assert_eq!(mock.call_count(), 1);
    }
}
