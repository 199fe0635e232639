use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::recruitment_type::{CreateTypeRequest, UpdateTypeRequest};
use crate::error::{Result, StorageError};
use crate::models::RecruitmentType;

const DUPLICATE_NAME: &str = "A recruitment type with this name already exists";

pub struct RecruitmentTypeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecruitmentTypeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RecruitmentType>> {
        let types = sqlx::query_as::<_, RecruitmentType>(
            r#"
            SELECT type_id, name, created_at
            FROM recruitment_types
            ORDER BY name, type_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<RecruitmentType> {
        sqlx::query_as::<_, RecruitmentType>(
            r#"
            SELECT type_id, name, created_at
            FROM recruitment_types
            WHERE type_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recruitment_types")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create(&self, req: &CreateTypeRequest) -> Result<RecruitmentType> {
        sqlx::query_as::<_, RecruitmentType>(
            r#"
            INSERT INTO recruitment_types (name)
            VALUES ($1)
            RETURNING type_id, name, created_at
            "#,
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message(DUPLICATE_NAME))
    }

    pub async fn update(
        &self,
        existing: &RecruitmentType,
        req: &UpdateTypeRequest,
    ) -> Result<RecruitmentType> {
        let name = req.name.as_ref().unwrap_or(&existing.name);

        sqlx::query_as::<_, RecruitmentType>(
            r#"
            UPDATE recruitment_types
            SET name = $2
            WHERE type_id = $1
            RETURNING type_id, name, created_at
            "#,
        )
        .bind(existing.type_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message(DUPLICATE_NAME))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a type together with its point value and recruits (cascade).
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM recruitment_types WHERE type_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
