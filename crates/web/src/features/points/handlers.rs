use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::recruitment_type::UpsertPointsRequest,
    models::{PointValue, TypeWithPoints},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/points",
    responses(
        (status = 200, description = "Recruitment types with their point values", body = Vec<TypeWithPoints>)
    ),
    tag = "points"
)]
pub async fn list_points(State(db): State<Database>) -> Result<Response, WebError> {
    let points = services::list_points(db.pool()).await?;

    Ok(Json(points).into_response())
}

#[utoipa::path(
    post,
    path = "/api/points",
    request_body = UpsertPointsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Point value stored", body = PointValue),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruitment type not found"),
        (status = 409, description = "Recruitment type deleted while saving")
    ),
    tag = "points"
)]
pub async fn set_points(
    State(db): State<Database>,
    Json(req): Json<UpsertPointsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let points = services::set_points(db.pool(), &req).await?;
    tracing::info!(type_id = %points.type_id, points = points.points, "Point value updated");

    Ok(Json(points).into_response())
}
