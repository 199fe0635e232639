use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leader::{CreateLeaderRequest, UpdateLeaderRequest};
use crate::error::{Result, StorageError};
use crate::models::Leader;

const DUPLICATE_EMAIL: &str = "A leader with this email already exists";

pub struct LeaderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all leaders, ordered by name then id
    pub async fn list(&self) -> Result<Vec<Leader>> {
        let leaders = sqlx::query_as::<_, Leader>(
            r#"
            SELECT leader_id, name, email, created_at
            FROM leaders
            ORDER BY name, leader_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(leaders)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Leader> {
        sqlx::query_as::<_, Leader>(
            r#"
            SELECT leader_id, name, email, created_at
            FROM leaders
            WHERE leader_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateLeaderRequest) -> Result<Leader> {
        let leader = sqlx::query_as::<_, Leader>(
            r#"
            INSERT INTO leaders (name, email)
            VALUES ($1, $2)
            RETURNING leader_id, name, email, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message(DUPLICATE_EMAIL))?;

        Ok(leader)
    }

    pub async fn update(
        &self,
        existing: &Leader,
        req: &UpdateLeaderRequest,
    ) -> Result<Leader> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let email = req.email.as_ref().unwrap_or(&existing.email);

        sqlx::query_as::<_, Leader>(
            r#"
            UPDATE leaders
            SET name = $2,
                email = $3
            WHERE leader_id = $1
            RETURNING leader_id, name, email, created_at
            "#,
        )
        .bind(existing.leader_id)
        .bind(name)
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message(DUPLICATE_EMAIL))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a leader. Their recruits are removed by the cascading foreign key.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM leaders WHERE leader_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
