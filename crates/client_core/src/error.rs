use thiserror::Error;

/// Failure modes of a single match request.
///
/// Callers facing end users collapse every variant into one generic message;
/// the detail here is for logs only.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("match request failed to complete: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("matching endpoint answered with status {status}")]
    Status { status: u16 },
    #[error("matching endpoint returned a malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl MatchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            MatchError::Status { status } => Some(*status),
            MatchError::Transport(err) => err.status().map(|status| status.as_u16()),
            MatchError::MalformedBody(_) => None,
        }
    }
}
