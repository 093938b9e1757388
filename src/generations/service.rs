use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    config::{generations_url, API_URL},
    dtos::generate_images_dto::GenerateImagesDto,
    errors::GenerationsApiError,
    structs::upstream_error_response::UpstreamErrorResponse,
};

pub async fn generate_images(dto: &GenerateImagesDto, state: &AppState) -> Result<Value, ApiError> {
    let Some(api_key) = state.envy.credential() else {
        tracing::error!("API_KEY is not configured, refusing to forward");
        return Err(GenerationsApiError::MissingCredential.value());
    };

    let base_url = state.envy.upstream_url.as_deref().unwrap_or(API_URL);

    let result = state
        .client
        .post(generations_url(base_url))
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(api_key)
        .json(dto)
        .send()
        .await;

    match result {
        Ok(res) => parse_upstream_response(res).await,
        Err(e) => {
            tracing::error!(%e, "upstream request failed");
            Err(GenerationsApiError::UpstreamUnreachable.value())
        }
    }
}

async fn parse_upstream_response(res: reqwest::Response) -> Result<Value, ApiError> {
    let status = res.status();

    // the body is consumed once; both branches work from the text
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e, %status, "failed to read upstream body");
            return Err(GenerationsApiError::InvalidUpstreamResponse.value());
        }
    };

    if !status.is_success() {
        let message = upstream_error_message(status, &text);
        tracing::warn!(%status, %message, "upstream returned an error");

        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        });
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(%e, %text, "upstream success body is not json");
            Err(GenerationsApiError::InvalidUpstreamResponse.value())
        }
    }
}

/// Picks the message surfaced for a failed upstream call: the structured
/// `error.message`, else the raw text, else a status-coded fallback.
pub fn upstream_error_message(status: StatusCode, text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::from_value::<UpstreamErrorResponse>(value)
            .ok()
            .and_then(|res| res.message().map(str::to_string))
            .unwrap_or_else(|| {
                format!(
                    "The image API returned an error with status: {}",
                    status.as_u16()
                )
            }),
        Err(_) => match text.trim() {
            "" => format!(
                "The image API returned a non-JSON error with status: {}",
                status.as_u16()
            ),
            trimmed => trimmed.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_structured_error_message() {
        let message = upstream_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"bad prompt","type":"invalid_request"}}"#,
        );

        assert_eq!(message, "bad prompt");
    }

    #[test]
    fn accepts_plain_string_error() {
        let message =
            upstream_error_message(StatusCode::UNAUTHORIZED, r#"{"error":"invalid api key"}"#);

        assert_eq!(message, "invalid api key");
    }

    #[test]
    fn json_without_message_falls_back_to_status() {
        let message = upstream_error_message(StatusCode::BAD_GATEWAY, r#"{"detail":"nope"}"#);

        assert_eq!(message, "The image API returned an error with status: 502");
    }

    #[test]
    fn blank_structured_message_falls_back_to_status() {
        let message =
            upstream_error_message(StatusCode::BAD_REQUEST, r#"{"error":{"message":"  "}}"#);

        assert_eq!(message, "The image API returned an error with status: 400");
    }

    #[test]
    fn non_json_body_is_surfaced_as_text() {
        let message =
            upstream_error_message(StatusCode::SERVICE_UNAVAILABLE, "upstream overloaded\n");

        assert_eq!(message, "upstream overloaded");
    }

    #[test]
    fn empty_body_falls_back_to_non_json_status() {
        let message = upstream_error_message(StatusCode::INTERNAL_SERVER_ERROR, "");

        assert_eq!(
            message,
            "The image API returned a non-JSON error with status: 500"
        );
    }
}
