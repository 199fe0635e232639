use sqlx::PgPool;
use storage::{
    dto::recruitment_type::UpsertPointsRequest,
    error::Result,
    models::{PointValue, TypeWithPoints},
    repository::{points::PointsRepository, recruitment_type::RecruitmentTypeRepository},
};

/// Every recruitment type with its configured points, if any
pub async fn list_points(pool: &PgPool) -> Result<Vec<TypeWithPoints>> {
    let repo = PointsRepository::new(pool);
    repo.list_types_with_points().await
}

/// Set the point value of a type, replacing the previous one
pub async fn set_points(pool: &PgPool, request: &UpsertPointsRequest) -> Result<PointValue> {
    RecruitmentTypeRepository::new(pool)
        .find_by_id(request.type_id)
        .await?;

    let repo = PointsRepository::new(pool);
    repo.upsert(request).await
}
