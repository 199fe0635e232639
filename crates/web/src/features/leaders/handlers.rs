use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leader::{CreateLeaderRequest, UpdateLeaderRequest},
    models::Leader,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaders",
    responses(
        (status = 200, description = "All leaders ordered by name", body = Vec<Leader>)
    ),
    tag = "leaders"
)]
pub async fn list_leaders(State(db): State<Database>) -> Result<Response, WebError> {
    let leaders = services::list_leaders(db.pool()).await?;

    Ok(Json(leaders).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaders/{id}",
    params(
        ("id" = Uuid, Path, description = "Leader id")
    ),
    responses(
        (status = 200, description = "Leader found", body = Leader),
        (status = 404, description = "Leader not found")
    ),
    tag = "leaders"
)]
pub async fn get_leader(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let leader = services::get_leader(db.pool(), id).await?;

    Ok(Json(leader).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaders",
    request_body = CreateLeaderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Leader created successfully", body = Leader),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Email already in use")
    ),
    tag = "leaders"
)]
pub async fn create_leader(
    State(db): State<Database>,
    Json(req): Json<CreateLeaderRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let leader = services::create_leader(db.pool(), &req).await?;
    tracing::info!(leader_id = %leader.leader_id, "Leader created");

    Ok((StatusCode::CREATED, Json(leader)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/leaders/{id}",
    params(
        ("id" = Uuid, Path, description = "Leader id")
    ),
    request_body = UpdateLeaderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Leader updated successfully", body = Leader),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Leader not found"),
        (status = 409, description = "Email already in use")
    ),
    tag = "leaders"
)]
pub async fn update_leader(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLeaderRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let leader = services::update_leader(db.pool(), id, &req).await?;

    Ok(Json(leader).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/leaders/{id}",
    params(
        ("id" = Uuid, Path, description = "Leader id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Leader and their recruits deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Leader not found")
    ),
    tag = "leaders"
)]
pub async fn delete_leader(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_leader(db.pool(), id).await?;
    tracing::info!(leader_id = %id, "Leader deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
