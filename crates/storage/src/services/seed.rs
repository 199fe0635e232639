use sqlx::PgPool;

use crate::dto::recruitment_type::{CreateTypeRequest, UpsertPointsRequest};
use crate::error::Result;
use crate::repository::{points::PointsRepository, recruitment_type::RecruitmentTypeRepository};

/// Recruitment types and point values installed on a fresh competition.
pub const DEFAULT_TYPES: &[(&str, i32)] = &[("Papers", 2), ("New Starter", 10), ("Established", 20)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { types_created: usize },
    AlreadySeeded,
}

/// Install [`DEFAULT_TYPES`] unless any recruitment type exists already.
pub async fn seed_defaults(pool: &PgPool) -> Result<SeedOutcome> {
    let types = RecruitmentTypeRepository::new(pool);
    if types.count().await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let points = PointsRepository::new(pool);
    for (name, value) in DEFAULT_TYPES {
        let created = types
            .create(&CreateTypeRequest {
                name: (*name).to_string(),
            })
            .await?;

        points
            .upsert(&UpsertPointsRequest {
                type_id: created.type_id,
                points: *value,
            })
            .await?;

        tracing::info!(type_name = %name, points = value, "Seeded recruitment type");
    }

    Ok(SeedOutcome::Seeded {
        types_created: DEFAULT_TYPES.len(),
    })
}
