//! Input events for the page controller.

use shared::domain::TalentCandidate;
use thiserror::Error;

use crate::controller::reducer::RequestToken;

/// Events consumed by [`crate::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    StartSubmit {
        token: RequestToken,
    },
    Success {
        token: RequestToken,
        talents: Vec<TalentCandidate>,
    },
    Failure {
        token: RequestToken,
    },
}

impl UiEvent {
    pub fn token(&self) -> RequestToken {
        match self {
            UiEvent::StartSubmit { token }
            | UiEvent::Success { token, .. }
            | UiEvent::Failure { token } => *token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("project description is empty")]
    EmptyDescription,
}

/// A key press inside the description field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl+Enter or Cmd+Enter submits instead of inserting a newline.
    pub fn is_submit_shortcut(&self) -> bool {
        self.key == "Enter" && (self.ctrl || self.meta)
    }
}
