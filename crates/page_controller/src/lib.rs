//! Page controller for the talent-matching landing page.
//!
//! The controller owns the page's UI state and talks to the page only through
//! [`ViewPorts`], so the same logic drives the browser build, the console
//! driver and the tests.

pub mod controller;
pub mod i18n;
pub mod ports;
pub mod render;
pub mod reveal;
pub mod settings;

pub use controller::{
    events::{KeyPress, SubmitRejected, UiEvent},
    orchestration::{CompletedSubmission, PageController, Submission},
    reducer::{reduce, RequestToken, Transition, UiState},
};
pub use i18n::{Language, LanguagePack, Region, TextDirection};
pub use ports::ViewPorts;
pub use render::{CandidateCard, ResultsView};
pub use reveal::ScrollReveal;
pub use settings::{load_settings, Messages, Settings, SettingsError};
