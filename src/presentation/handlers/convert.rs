use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{ConversionRequest, ConversionResult};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(file_name = %request.file_name, client = %request.client)
)]
pub async fn convert_handler(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        tracing::warn!(error = %e, "Rejected conversion request");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let data = match state.blob_store.fetch(&request.location()).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, blob_location = %request.blob_location, "Failed to download blob");
            let result = ConversionResult::failed(
                &request,
                format!("Failed to download blob: {e}"),
                state.clock.now(),
            );
            return (StatusCode::BAD_GATEWAY, Json(result)).into_response();
        }
    };

    match state.conversion_service.convert(data, &request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
