use sqlx::PgPool;
use storage::{
    dto::recruitment_type::{CreateTypeRequest, UpdateTypeRequest},
    error::Result,
    models::RecruitmentType,
    repository::recruitment_type::RecruitmentTypeRepository,
};
use uuid::Uuid;

pub async fn list_types(pool: &PgPool) -> Result<Vec<RecruitmentType>> {
    let repo = RecruitmentTypeRepository::new(pool);
    repo.list().await
}

pub async fn create_type(pool: &PgPool, request: &CreateTypeRequest) -> Result<RecruitmentType> {
    let repo = RecruitmentTypeRepository::new(pool);
    repo.create(request).await
}

pub async fn update_type(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateTypeRequest,
) -> Result<RecruitmentType> {
    let repo = RecruitmentTypeRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

/// Delete a type. Its point value and recruits go with it.
pub async fn delete_type(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RecruitmentTypeRepository::new(pool);
    repo.delete(id).await
}
