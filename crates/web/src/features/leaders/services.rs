use sqlx::PgPool;
use storage::{
    dto::leader::{CreateLeaderRequest, UpdateLeaderRequest},
    error::Result,
    models::Leader,
    repository::leader::LeaderRepository,
};
use uuid::Uuid;

/// List all leaders
pub async fn list_leaders(pool: &PgPool) -> Result<Vec<Leader>> {
    let repo = LeaderRepository::new(pool);
    repo.list().await
}

pub async fn get_leader(pool: &PgPool, id: Uuid) -> Result<Leader> {
    let repo = LeaderRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_leader(pool: &PgPool, request: &CreateLeaderRequest) -> Result<Leader> {
    let repo = LeaderRepository::new(pool);
    repo.create(request).await
}

/// Update the fields present in the request
pub async fn update_leader(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateLeaderRequest,
) -> Result<Leader> {
    let repo = LeaderRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

/// Delete a leader along with their recruits
pub async fn delete_leader(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = LeaderRepository::new(pool);
    repo.delete(id).await
}
