use std::{fs, path::Path};

use serde::Deserialize;
use shared::protocol::MATCH_TALENT_PATH;
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "matcher.toml";

/// Fixed user-facing strings. None of them carry error detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_description: String,
    pub submit_label: String,
    pub submit_busy_label: String,
    pub no_match: String,
    pub error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_description: "Please describe your project first!".into(),
            submit_label: "Find Talent".into(),
            submit_busy_label: "Finding...".into(),
            no_match: "No matching professionals found. Please try a different description."
                .into(),
            error: "Sorry, we encountered an error while finding talent. Please try again."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Origin the endpoint is resolved against, e.g. `https://example.com`.
    pub base_url: Option<String>,
    pub endpoint: String,
    pub messages: Messages,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoint: MATCH_TALENT_PATH.into(),
            messages: Messages::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("endpoint '{endpoint}' is relative and no base url is configured")]
    MissingBaseUrl { endpoint: String },
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Settings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Absolute URL of the matching endpoint.
    pub fn endpoint_url(&self) -> Result<Url, SettingsError> {
        if let Ok(absolute) = Url::parse(&self.endpoint) {
            return Ok(absolute);
        }
        let Some(base_url) = self.base_url.as_deref() else {
            return Err(SettingsError::MissingBaseUrl {
                endpoint: self.endpoint.clone(),
            });
        };
        Ok(Url::parse(base_url)?.join(&self.endpoint)?)
    }

    /// Applies `MATCHER_*` and `APP__*` overrides; `APP__` wins when both are set.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("MATCHER_BASE_URL") {
            self.base_url = Some(v);
        }
        if let Some(v) = lookup("APP__BASE_URL") {
            self.base_url = Some(v);
        }

        if let Some(v) = lookup("MATCHER_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("APP__ENDPOINT") {
            self.endpoint = v;
        }
    }
}

/// Loads settings from a TOML file. A missing or unreadable file yields defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(raw) = fs::read_to_string(path) else {
        return Settings::default();
    };
    match toml::from_str::<Settings>(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), "ignoring unparsable settings file: {err}");
            Settings::default()
        }
    }
}

/// Defaults, then `matcher.toml` in the working directory, then the environment.
///
/// Only the console driver calls this. The browser page never reads files or
/// environment variables: it starts from [`Settings::default`] and sets
/// `base_url` to the page origin.
pub fn load_settings() -> Settings {
    let mut settings = load_settings_from(Path::new(SETTINGS_FILE));
    settings.apply_env_overrides(|key| std::env::var(key).ok());
    settings
}
