use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};

/// Review state of a recruit. Only `Confirmed` recruits are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "recruit_status")]
pub enum RecruitStatus {
    Submitted,
    Confirmed,
}

impl RecruitStatus {
    /// Admin confirmation. Only a submitted recruit can be confirmed.
    pub fn confirm(self) -> Result<Self> {
        match self {
            Self::Submitted => Ok(Self::Confirmed),
            Self::Confirmed => Err(StorageError::InvalidTransition(
                "recruit is already confirmed".to_string(),
            )),
        }
    }

    /// Admin rejection sends a confirmed recruit back to `Submitted`.
    pub fn reject(self) -> Result<Self> {
        match self {
            Self::Confirmed => Ok(Self::Submitted),
            Self::Submitted => Err(StorageError::InvalidTransition(
                "only confirmed recruits can be rejected".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Confirmed => "Confirmed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recruit {
    pub recruit_id: Uuid,
    pub name: String,
    pub leader_id: Uuid,
    pub type_id: Uuid,
    /// Attribution date used for period filtering, independent of `created_at`.
    pub date: DateTime<Utc>,
    pub mobile: String,
    pub email: String,
    pub notes: Option<String>,
    pub status: RecruitStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recruit {
    pub fn is_confirmed(&self) -> bool {
        self.status == RecruitStatus::Confirmed
    }
}
