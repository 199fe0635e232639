use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        recruit::{
            CreateRecruitRequest, RecruitFilter, RecruitWithRelations, UpdateRecruitStatusRequest,
        },
    },
    models::Recruit,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/recruits",
    params(RecruitFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recruits, newest first", body = PaginatedResponse<RecruitWithRelations>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "recruits"
)]
pub async fn list_recruits(
    State(db): State<Database>,
    Query(filter): Query<RecruitFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let (recruits, total_items) = services::list_recruits(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(recruits, &filter.pagination(), total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/recruits/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruit id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recruit found", body = RecruitWithRelations),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Recruit not found")
    ),
    tag = "recruits"
)]
pub async fn get_recruit(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let recruit = services::get_recruit(db.pool(), id).await?;

    Ok(Json(recruit).into_response())
}

#[utoipa::path(
    post,
    path = "/api/recruits",
    request_body = CreateRecruitRequest,
    responses(
        (status = 201, description = "Recruit submitted for confirmation", body = Recruit),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unknown leader or recruitment type")
    ),
    tag = "recruits"
)]
pub async fn submit_recruit(
    State(db): State<Database>,
    Json(req): Json<CreateRecruitRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let recruit = services::submit_recruit(db.pool(), &req).await?;
    tracing::info!(recruit_id = %recruit.recruit_id, leader_id = %recruit.leader_id, "Recruit submitted");

    Ok((StatusCode::CREATED, Json(recruit)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/recruits/{id}/confirm",
    params(
        ("id" = Uuid, Path, description = "Recruit id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recruit confirmed", body = Recruit),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruit not found"),
        (status = 409, description = "Recruit is already confirmed")
    ),
    tag = "recruits"
)]
pub async fn confirm_recruit(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let recruit = services::confirm_recruit(db.pool(), id).await?;
    tracing::info!(recruit_id = %id, "Recruit confirmed");

    Ok(Json(recruit).into_response())
}

#[utoipa::path(
    post,
    path = "/api/recruits/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Recruit id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recruit returned to submitted", body = Recruit),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruit not found"),
        (status = 409, description = "Recruit is not confirmed")
    ),
    tag = "recruits"
)]
pub async fn reject_recruit(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let recruit = services::reject_recruit(db.pool(), id).await?;
    tracing::info!(recruit_id = %id, "Recruit rejected");

    Ok(Json(recruit).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/recruits/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Recruit id")
    ),
    request_body = UpdateRecruitStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status updated", body = Recruit),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruit not found")
    ),
    tag = "recruits"
)]
pub async fn update_status(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecruitStatusRequest>,
) -> Result<Response, WebError> {
    let recruit = services::set_status(db.pool(), id, req.status).await?;
    tracing::info!(recruit_id = %id, status = req.status.as_str(), "Recruit status set");

    Ok(Json(recruit).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/recruits/{id}",
    params(
        ("id" = Uuid, Path, description = "Recruit id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Recruit deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Recruit not found")
    ),
    tag = "recruits"
)]
pub async fn delete_recruit(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_recruit(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
