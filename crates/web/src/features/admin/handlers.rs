use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storage::{Database, services::seed::SeedOutcome};
use utoipa::ToSchema;

use crate::error::WebError;

use super::services;

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub seeded: bool,
    pub types_created: usize,
    pub message: String,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::Seeded { types_created } => Self {
                seeded: true,
                types_created,
                message: format!("Created {types_created} default recruitment types"),
            },
            SeedOutcome::AlreadySeeded => Self {
                seeded: false,
                types_created: 0,
                message: "Recruitment types already exist".to_string(),
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/seed",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Default recruitment types created", body = SeedResponse),
        (status = 200, description = "Recruitment types already exist", body = SeedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin"
)]
pub async fn seed(State(db): State<Database>) -> Result<Response, WebError> {
    let outcome = services::seed(db.pool()).await?;

    let status = match outcome {
        SeedOutcome::Seeded { .. } => StatusCode::CREATED,
        SeedOutcome::AlreadySeeded => StatusCode::OK,
    };

    Ok((status, Json(SeedResponse::from(outcome))).into_response())
}
