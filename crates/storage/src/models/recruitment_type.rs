use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RecruitmentType {
    pub type_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A recruitment type joined with its point value, if one is configured.
///
/// `points` is `None` for an unscored type; such types contribute 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TypeWithPoints {
    pub type_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub points: Option<i32>,
}
