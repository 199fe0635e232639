use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::recruit::{
    CreateRecruitRequest, LeaderSummary, RecruitFilter, RecruitWithRelations, TypeSummary,
};
use crate::error::{Result, StorageError};
use crate::models::{Recruit, RecruitStatus, Window};

const RECRUIT_COLUMNS: &str = "r.recruit_id, r.name, r.leader_id, r.type_id, r.date, r.mobile, \
     r.email, r.notes, r.status, r.created_at, r.updated_at";

#[derive(FromRow)]
struct RecruitRow {
    recruit_id: Uuid,
    name: String,
    leader_id: Uuid,
    type_id: Uuid,
    date: DateTime<Utc>,
    mobile: String,
    email: String,
    notes: Option<String>,
    status: RecruitStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    leader_name: String,
    leader_email: String,
    type_name: String,
}

impl From<RecruitRow> for RecruitWithRelations {
    fn from(row: RecruitRow) -> Self {
        Self {
            leader: LeaderSummary {
                leader_id: row.leader_id,
                name: row.leader_name,
                email: row.leader_email,
            },
            recruitment_type: TypeSummary {
                type_id: row.type_id,
                name: row.type_name,
            },
            recruit: Recruit {
                recruit_id: row.recruit_id,
                name: row.name,
                leader_id: row.leader_id,
                type_id: row.type_id,
                date: row.date,
                mobile: row.mobile,
                email: row.email,
                notes: row.notes,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

pub struct RecruitRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecruitRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List recruits matching `filter`, newest first, with the total match count
    pub async fn list(&self, filter: &RecruitFilter) -> Result<(Vec<RecruitWithRelations>, i64)> {
        let pagination = filter.pagination();

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM recruits r WHERE 1=1");
        push_filter(&mut count_query, filter);
        let total_items = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let mut query = QueryBuilder::new("SELECT ");
        query.push(RECRUIT_COLUMNS);
        query.push(
            r#",
                l.name AS leader_name,
                l.email AS leader_email,
                t.name AS type_name
            FROM recruits r
            INNER JOIN leaders l ON l.leader_id = r.leader_id
            INNER JOIN recruitment_types t ON t.type_id = r.type_id
            WHERE 1=1
            "#,
        );
        push_filter(&mut query, filter);
        query.push(" ORDER BY r.created_at DESC, r.recruit_id LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let rows: Vec<RecruitRow> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((rows.into_iter().map(RecruitWithRelations::from).collect(), total_items))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<RecruitWithRelations> {
        let mut query = QueryBuilder::new("SELECT ");
        query.push(RECRUIT_COLUMNS);
        query.push(
            r#",
                l.name AS leader_name,
                l.email AS leader_email,
                t.name AS type_name
            FROM recruits r
            INNER JOIN leaders l ON l.leader_id = r.leader_id
            INNER JOIN recruitment_types t ON t.type_id = r.type_id
            WHERE r.recruit_id =
            "#,
        );
        query.push_bind(id);

        let row: RecruitRow = query
            .build_query_as()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(row.into())
    }

    /// Store a new recruit. New recruits always start out `Submitted`.
    pub async fn create(&self, req: &CreateRecruitRequest) -> Result<Recruit> {
        sqlx::query_as::<_, Recruit>(
            r#"
            INSERT INTO recruits (name, leader_id, type_id, date, mobile, email, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING recruit_id, name, leader_id, type_id, date, mobile, email, notes,
                      status, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.leader_id)
        .bind(req.type_id)
        .bind(req.date)
        .bind(&req.mobile)
        .bind(&req.email)
        .bind(&req.notes)
        .bind(RecruitStatus::Submitted)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_message("Unknown leader or recruitment type")
        })
    }

    pub async fn update_status(&self, id: Uuid, status: RecruitStatus) -> Result<Recruit> {
        sqlx::query_as::<_, Recruit>(
            r#"
            UPDATE recruits
            SET status = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE recruit_id = $1
            RETURNING recruit_id, name, leader_id, type_id, date, mobile, email, notes,
                      status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM recruits WHERE recruit_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Confirmed recruits dated inside `window`, optionally for a single leader
    pub async fn list_confirmed(
        &self,
        leader_id: Option<Uuid>,
        window: &Window,
    ) -> Result<Vec<Recruit>> {
        let mut query = QueryBuilder::new("SELECT ");
        query.push(RECRUIT_COLUMNS);
        query.push(" FROM recruits r WHERE r.status = ");
        query.push_bind(RecruitStatus::Confirmed);

        if let Some(leader_id) = leader_id {
            query.push(" AND r.leader_id = ");
            query.push_bind(leader_id);
        }

        push_window(&mut query, window);
        query.push(" ORDER BY r.date, r.recruit_id");

        let recruits: Vec<Recruit> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(recruits)
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &RecruitFilter) {
    if let Some(status) = filter.status {
        query.push(" AND r.status = ");
        query.push_bind(status);
    }

    if let Some(leader_id) = filter.leader_id {
        query.push(" AND r.leader_id = ");
        query.push_bind(leader_id);
    }

    push_window(query, &Window::new(filter.date_from, filter.date_to));
}

fn push_window(query: &mut QueryBuilder<'_, Postgres>, window: &Window) {
    if let Some(from) = window.from {
        query.push(" AND r.date >= ");
        query.push_bind(from);
    }

    if let Some(to) = window.to {
        query.push(" AND r.date <= ");
        query.push_bind(to);
    }
}
