use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpstreamErrorResponse {
    #[serde(default)]
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamError {
    Detailed {
        #[serde(default)]
        message: Option<String>,
    },
    Message(String),
}

impl UpstreamErrorResponse {
    pub fn message(&self) -> Option<&str> {
        let message = match self.error.as_ref()? {
            UpstreamError::Detailed { message } => message.as_deref()?,
            UpstreamError::Message(message) => message.as_str(),
        };

        match message.trim().is_empty() {
            true => None,
            false => Some(message),
        }
    }
}
