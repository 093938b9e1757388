use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    MissingCredential,
    UpstreamUnreachable,
    InvalidUpstreamResponse,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingCredential => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "API key is not set in the server environment.".to_string(),
            },
            Self::UpstreamUnreachable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach the image API.".to_string(),
            },
            Self::InvalidUpstreamResponse => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The image API returned an invalid response.".to_string(),
            },
        }
    }
}
