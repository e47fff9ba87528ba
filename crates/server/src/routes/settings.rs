use axum::{extract::{rejection::JsonRejection, State}, Json};
use service::settings::{Colors, ColorsUpdate};

use crate::errors::JsonApiError;
use crate::messages::{self, Op};
use crate::responses::DataResponse;
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/settings/colors", tag = "settings", responses((status = 200, description = "Current colors", body = crate::openapi::ColorsDoc)))]
pub async fn get_colors(State(state): State<ServerState>) -> Json<DataResponse<Colors>> {
    Json(DataResponse::new(state.settings.get_colors().await))
}

#[utoipa::path(
    put, path = "/api/settings/colors", tag = "settings",
    request_body = crate::openapi::ColorsUpdateDoc,
    responses(
        (status = 200, description = "Merged colors", body = crate::openapi::ColorsDoc),
        (status = 400, description = "Neither orange nor green supplied"),
        (status = 500, description = "Save failed")
    )
)]
pub async fn update_colors(
    State(state): State<ServerState>,
    body: Result<Json<ColorsUpdate>, JsonRejection>,
) -> Result<Json<DataResponse<Colors>>, JsonApiError> {
    let Json(update) = body.map_err(JsonApiError::bad_body)?;
    let colors = state
        .settings
        .update_colors(update)
        .await
        .map_err(|e| JsonApiError::from_service(e, Op::UpdateColors))?;
    Ok(Json(DataResponse::with_message(colors, messages::COLORS_UPDATED)))
}
