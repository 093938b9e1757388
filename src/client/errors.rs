use thiserror::Error;

/// Failures surfaced to the user. `Display` is the message shown in place of
/// the image grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("Rate limit exceeded. Please wait a moment.")]
    RateLimited,
    #[error("{0}")]
    Upstream(String),
    #[error("API returned no images. Please try a different prompt.")]
    EmptyResult,
    #[error("{0}")]
    Transport(String),
    #[error("A generation is already in progress.")]
    InFlight,
}

impl ClientError {
    pub fn empty_prompt() -> Self {
        Self::Validation("Please enter a prompt.".to_string())
    }
}
