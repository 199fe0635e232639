use sqlx::PgPool;
use storage::{
    error::Result,
    services::seed::{SeedOutcome, seed_defaults},
};

pub async fn seed(pool: &PgPool) -> Result<SeedOutcome> {
    seed_defaults(pool).await
}
