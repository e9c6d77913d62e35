//! Common types and data structures

use crate::model::QaModel;
use crate::session::Outcome;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Lifecycle of the session's model handle
#[derive(Clone)]
pub enum ModelStatus {
    Loading,
    Ready(Arc<dyn QaModel>),
    /// Loading failed; the form stays unreachable for the rest of the session
    Failed(String),
}

/// State of the most recent button press
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AskState {
    #[default]
    Idle,
    Pending,
    Done {
        outcome: Outcome,
        at: DateTime<Local>,
    },
}

impl AskState {
    pub fn done(outcome: Outcome) -> Self {
        Self::Done {
            outcome,
            at: Local::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
