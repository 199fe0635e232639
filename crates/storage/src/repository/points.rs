use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::recruitment_type::UpsertPointsRequest;
use crate::error::{Result, StorageError};
use crate::models::{PointValue, TypeWithPoints};

pub struct PointsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PointsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every recruitment type with its point value, or `NULL` points when unset
    pub async fn list_types_with_points(&self) -> Result<Vec<TypeWithPoints>> {
        let types = sqlx::query_as::<_, TypeWithPoints>(
            r#"
            SELECT t.type_id, t.name, t.created_at, p.points
            FROM recruitment_types t
            LEFT JOIN point_values p ON p.type_id = t.type_id
            ORDER BY t.name, t.type_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(types)
    }

    pub async fn find_for_type(&self, type_id: Uuid) -> Result<Option<PointValue>> {
        let points = sqlx::query_as::<_, PointValue>(
            r#"
            SELECT points_id, type_id, points, created_at, updated_at
            FROM point_values
            WHERE type_id = $1
            "#,
        )
        .bind(type_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(points)
    }

    /// Insert or replace the point value of a type. Concurrent writers race
    /// on the unique `type_id` and the last one wins.
    pub async fn upsert(&self, req: &UpsertPointsRequest) -> Result<PointValue> {
        sqlx::query_as::<_, PointValue>(
            r#"
            INSERT INTO point_values (type_id, points)
            VALUES ($1, $2)
            ON CONFLICT (type_id)
            DO UPDATE SET
                points = EXCLUDED.points,
                updated_at = CURRENT_TIMESTAMP
            RETURNING points_id, type_id, points, created_at, updated_at
            "#,
        )
        .bind(req.type_id)
        .bind(req.points)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message("Unknown recruitment type"))
    }
}
