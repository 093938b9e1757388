use axum::{extract::State, Json};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::generate_images_dto::GenerateImagesDto, service};

pub async fn generate_images(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImagesDto>,
) -> Result<Json<Value>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_images", %request_id);

    async move {
        tracing::info!(model = ?dto.model, num_images = ?dto.num_images, size = ?dto.size, "forwarding generation request");

        match service::generate_images(&dto, &state).await {
            Ok(value) => Ok(Json(value)),
            Err(e) => Err(e),
        }
    }
    .instrument(span)
    .await
}
