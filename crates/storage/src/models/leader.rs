use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Leader {
    pub leader_id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
