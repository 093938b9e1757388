use reqwest::StatusCode;
use serde_json::Value;

use super::{errors::ClientError, models::generation_result::GenerationResult};

static UNKNOWN_ERROR: &str = "An unknown error occurred.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Success { images: Vec<String> },
    Error { message: String },
}

impl DisplayState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn images(&self) -> &[String] {
        match self {
            Self::Success { images } => images.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<ClientError> for DisplayState {
    fn from(e: ClientError) -> Self {
        Self::Error {
            message: e.to_string(),
        }
    }
}

/// Status and parsed JSON body returned by the proxy.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Maps a finished request onto the image list it produced, or the error to
/// show instead.
pub fn interpret(response: ProxyResponse) -> Result<Vec<String>, ClientError> {
    if !response.status.is_success() {
        let message = response
            .body
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_ERROR);

        return Err(ClientError::Upstream(message.to_string()));
    }

    // a success body without a readable image list counts as no images
    let result = match serde_json::from_value::<GenerationResult>(response.body) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(%e, "success body has no usable image list");
            return Err(ClientError::EmptyResult);
        }
    };

    let images = result.into_urls();

    match images.is_empty() {
        true => Err(ClientError::EmptyResult),
        false => Ok(images),
    }
}

/// State after a request leaves `Loading`.
pub fn transition(result: Result<ProxyResponse, ClientError>) -> DisplayState {
    match result.and_then(interpret) {
        Ok(images) => DisplayState::Success { images },
        Err(e) => e.into(),
    }
}
