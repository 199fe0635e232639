use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::settings::{CompetitionSettings, UpdateSettingsRequest},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Configured competition period", body = CompetitionSettings)
    ),
    tag = "settings"
)]
pub async fn get_settings(State(db): State<Database>) -> Result<Response, WebError> {
    let settings = services::get_settings(db.pool()).await?;

    Ok(Json(settings).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition period updated", body = CompetitionSettings),
        (status = 400, description = "Competition ends before it starts"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(db): State<Database>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Response, WebError> {
    let settings = services::update_settings(db.pool(), &req).await?;
    tracing::info!(
        start = ?settings.competition_start,
        end = ?settings.competition_end,
        "Competition period updated"
    );

    Ok(Json(settings).into_response())
}
