//! Submission flow and language switching on top of the reducer.

use client_core::{MatchError, TalentMatcher};
use shared::domain::TalentCandidate;
use tracing::{debug, info, warn};

use crate::{
    controller::{
        events::{KeyPress, SubmitRejected, UiEvent},
        reducer::{reduce, RequestToken, Transition, UiState},
    },
    i18n::{Language, Region},
    ports::ViewPorts,
    render::ResultsView,
    settings::Messages,
};

/// An accepted submission waiting for the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    token: RequestToken,
    description: String,
}

impl Submission {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Trimmed, non-empty description sent to the matcher.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Runs the request without touching the controller, so callers can
    /// release their hold on it across the await.
    pub async fn dispatch<M>(self, matcher: &M) -> CompletedSubmission
    where
        M: TalentMatcher + ?Sized,
    {
        let outcome = matcher.match_talent(&self.description).await;
        CompletedSubmission {
            token: self.token,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct CompletedSubmission {
    pub token: RequestToken,
    pub outcome: Result<Vec<TalentCandidate>, MatchError>,
}

pub struct PageController<P> {
    ports: P,
    messages: Messages,
    state: UiState,
    last_token: RequestToken,
    language: Language,
}

impl<P: ViewPorts> PageController<P> {
    /// The page starts in English with the default submit label.
    pub fn new(ports: P, messages: Messages) -> Self {
        Self {
            ports,
            messages,
            state: UiState::Idle,
            last_token: RequestToken(0),
            language: Language::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    pub fn into_ports(self) -> P {
        self.ports
    }

    /// Validates the description and enters `Loading`.
    ///
    /// An empty (after trimming) description alerts the user and leaves the
    /// state untouched.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitRejected> {
        let raw = self.ports.project_description();
        let description = raw.trim();
        if description.is_empty() {
            self.ports.alert(&self.messages.empty_description);
            return Err(SubmitRejected::EmptyDescription);
        }

        let token = self.last_token.next();
        self.last_token = token;
        self.apply(UiEvent::StartSubmit { token });
        info!(%token, chars = description.chars().count(), "submitting project description");

        Ok(Submission {
            token,
            description: description.to_string(),
        })
    }

    /// Applies a finished request. Results of superseded submissions are dropped.
    pub fn complete_submission(&mut self, completed: CompletedSubmission) {
        let CompletedSubmission { token, outcome } = completed;
        let event = match outcome {
            Ok(talents) => UiEvent::Success { token, talents },
            Err(err) => {
                warn!(%token, status = ?err.status(), "talent matching failed: {err}");
                UiEvent::Failure { token }
            }
        };
        self.apply(event);
    }

    /// Click on the submit control.
    pub fn on_submit_click(&mut self) -> Option<Submission> {
        self.begin_submission().ok()
    }

    /// Key press in the description field. Ctrl/Cmd+Enter submits exactly as
    /// a click does; every other key is left to the field.
    pub fn on_description_key(&mut self, key: &KeyPress) -> Option<Submission> {
        if !key.is_submit_shortcut() {
            return None;
        }
        self.on_submit_click()
    }

    /// Full submission flow for callers that can hold the controller across the request.
    pub async fn submit<M>(&mut self, matcher: &M) -> Result<RequestToken, SubmitRejected>
    where
        M: TalentMatcher + ?Sized,
    {
        let submission = self.begin_submission()?;
        let token = submission.token();
        let completed = submission.dispatch(matcher).await;
        self.complete_submission(completed);
        Ok(token)
    }

    /// Switches the page text and direction. Unknown codes are ignored.
    pub fn select_language(&mut self, code: &str) -> bool {
        let Some(language) = Language::from_code(code) else {
            debug!(code, "ignoring unsupported language code");
            return false;
        };

        let pack = language.pack();
        for region in Region::ALL {
            let Some(text) = pack.translation(region) else {
                continue;
            };
            if !self.ports.set_region_text(region, text) {
                debug!(region = region.key(), "page has no element for region");
            }
        }
        self.ports.set_direction(language.direction());
        self.language = language;
        info!(%language, "language switched");
        true
    }

    pub fn scroll_to_matcher(&mut self) {
        self.ports.scroll_to_matcher();
    }

    fn apply(&mut self, event: UiEvent) {
        let token = event.token();
        match reduce(&self.state, event, &self.messages) {
            Transition::Applied(next) => {
                self.state = next;
                self.paint();
            }
            Transition::Discarded => {
                debug!(%token, latest = %self.last_token, "discarding stale match response");
            }
        }
    }

    fn paint(&mut self) {
        match &self.state {
            UiState::Idle => self.restore_submit(),
            UiState::Loading { .. } => {
                self.ports.set_loading_visible(true);
                self.ports.set_results_visible(false);
                self.ports.set_submit_enabled(false);
                self.ports.set_submit_label(&self.messages.submit_busy_label);
            }
            UiState::ResultsShown(view) => {
                self.ports.render_results(view);
                self.ports.set_results_visible(true);
                self.restore_submit();
            }
            UiState::ErrorShown { message } => {
                self.ports
                    .render_results(&ResultsView::Error(message.clone()));
                self.ports.set_results_visible(true);
                self.restore_submit();
            }
        }
    }

    // Both completion paths end here.
    fn restore_submit(&mut self) {
        self.ports.set_loading_visible(false);
        self.ports.set_submit_enabled(true);
        self.ports.set_submit_label(&self.messages.submit_label);
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
