use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{enums::api_status::ApiStatus, errors::DefaultApiError, models::api_error::ApiError};

/// Reports `maintenance` while no upstream credential is configured, since
/// every generation request would fail closed.
pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    let api_status = match state.envy.credential() {
        Some(_) => ApiStatus::Online,
        None => ApiStatus::Maintenance,
    };

    Json(json!({
        "api_status": api_status.value(),
    }))
}

pub async fn method_not_allowed() -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}

pub async fn not_found() -> ApiError {
    DefaultApiError::NotFound.value()
}
