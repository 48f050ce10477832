use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::TalentCandidate,
    protocol::{MatchTalentRequest, MatchTalentResponse},
};
use tracing::{debug, warn};
use url::Url;

pub mod error;
pub use error::MatchError;

/// Source of talent matches for a project description.
///
/// The browser build drives this from a single-threaded executor, so the
/// returned futures are not required to be `Send` there.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TalentMatcher {
    async fn match_talent(
        &self,
        project_description: &str,
    ) -> Result<Vec<TalentCandidate>, MatchError>;
}

/// Posts descriptions to the remote matching endpoint.
#[derive(Debug, Clone)]
pub struct HttpTalentMatcher {
    http: Client,
    endpoint: Url,
}

impl HttpTalentMatcher {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TalentMatcher for HttpTalentMatcher {
    async fn match_talent(
        &self,
        project_description: &str,
    ) -> Result<Vec<TalentCandidate>, MatchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&MatchTalentRequest::new(project_description))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint = %self.endpoint, "match request rejected");
            return Err(MatchError::Status {
                status: status.as_u16(),
            });
        }

        // Read as text first so a bad body surfaces as MalformedBody, not Transport.
        let body = response.text().await?;
        let talents = serde_json::from_str::<MatchTalentResponse>(&body)?.into_talents();
        debug!(count = talents.len(), "received talent matches");
        Ok(talents)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
