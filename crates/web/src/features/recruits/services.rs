use sqlx::PgPool;
use storage::{
    dto::recruit::{CreateRecruitRequest, RecruitFilter, RecruitWithRelations},
    error::Result,
    models::{Recruit, RecruitStatus},
    repository::recruit::RecruitRepository,
};
use uuid::Uuid;

/// List recruits with filtering and pagination
pub async fn list_recruits(
    pool: &PgPool,
    filter: &RecruitFilter,
) -> Result<(Vec<RecruitWithRelations>, i64)> {
    let repo = RecruitRepository::new(pool);
    repo.list(filter).await
}

pub async fn get_recruit(pool: &PgPool, id: Uuid) -> Result<RecruitWithRelations> {
    let repo = RecruitRepository::new(pool);
    repo.find_by_id(id).await
}

/// Record a new submission awaiting confirmation
pub async fn submit_recruit(pool: &PgPool, request: &CreateRecruitRequest) -> Result<Recruit> {
    let repo = RecruitRepository::new(pool);
    repo.create(request).await
}

/// Move a submitted recruit to confirmed
pub async fn confirm_recruit(pool: &PgPool, id: Uuid) -> Result<Recruit> {
    let repo = RecruitRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let status = existing.recruit.status.confirm()?;
    repo.update_status(id, status).await
}

/// Send a confirmed recruit back to submitted
pub async fn reject_recruit(pool: &PgPool, id: Uuid) -> Result<Recruit> {
    let repo = RecruitRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let status = existing.recruit.status.reject()?;
    repo.update_status(id, status).await
}

pub async fn set_status(pool: &PgPool, id: Uuid, status: RecruitStatus) -> Result<Recruit> {
    let repo = RecruitRepository::new(pool);
    repo.update_status(id, status).await
}

pub async fn delete_recruit(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RecruitRepository::new(pool);
    repo.delete(id).await
}
