//! UI state and its single transition function.

use std::fmt;

use crate::{controller::events::UiEvent, render::ResultsView, settings::Messages};

/// Identifies one submission. Issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    /// `token` is always the most recently issued one.
    Loading { token: RequestToken },
    ResultsShown(ResultsView),
    ErrorShown { message: String },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Applied(UiState),
    /// The event belonged to a superseded submission.
    Discarded,
}

/// Computes the next state for `event`.
///
/// A completion only applies while the state is `Loading` with the same
/// token; anything else is a stale response and is discarded.
pub fn reduce(state: &UiState, event: UiEvent, messages: &Messages) -> Transition {
    match event {
        UiEvent::StartSubmit { token } => Transition::Applied(UiState::Loading { token }),
        UiEvent::Success { token, talents } => match state {
            UiState::Loading { token: current } if *current == token => Transition::Applied(
                UiState::ResultsShown(ResultsView::from_talents(&talents, &messages.no_match)),
            ),
            _ => Transition::Discarded,
        },
        UiEvent::Failure { token } => match state {
            UiState::Loading { token: current } if *current == token => {
                Transition::Applied(UiState::ErrorShown {
                    message: messages.error.clone(),
                })
            }
            _ => Transition::Discarded,
        },
    }
}
