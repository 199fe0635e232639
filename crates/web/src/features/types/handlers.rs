use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::recruitment_type::{CreateTypeRequest, UpdateTypeRequest},
    models::RecruitmentType,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/types",
    responses(
        (status = 200, description = "All recruitment types", body = Vec<RecruitmentType>)
    ),
    tag = "types"
)]
pub async fn list_types(State(db): State<Database>) -> Result<Response, WebError> {
    let types = services::list_types(db.pool()).await?;

    Ok(Json(types).into_response())
}

#[utoipa::path(
    post,
    path = "/api/types",
    request_body = CreateTypeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Recruitment type created", body = RecruitmentType),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Type name already exists")
    ),
    tag = "types"
)]
pub async fn create_type(
    State(db): State<Database>,
    Json(req): Json<CreateTypeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let created = services::create_type(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/types/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruitment type id")
    ),
    request_body = UpdateTypeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recruitment type renamed", body = RecruitmentType),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruitment type not found"),
        (status = 409, description = "Type name already exists")
    ),
    tag = "types"
)]
pub async fn update_type(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTypeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_type(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/types/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruitment type id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Recruitment type deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruitment type not found")
    ),
    tag = "types"
)]
pub async fn delete_type(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_type(db.pool(), id).await?;
    tracing::info!(type_id = %id, "Recruitment type deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
