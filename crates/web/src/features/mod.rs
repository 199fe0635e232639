use axum::Router;
use storage::Database;

use crate::middleware::auth::ApiKeys;

pub mod admin;
pub mod leaders;
pub mod points;
pub mod recruits;
pub mod scorecard;
pub mod settings;
pub mod types;

/// Every endpoint served under `/api`
pub fn api_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .nest("/scorecard", scorecard::routes::routes())
        .nest("/leaders", leaders::routes::routes(api_keys.clone()))
        .nest("/types", types::routes::routes(api_keys.clone()))
        .nest("/points", points::routes::routes(api_keys.clone()))
        .nest("/recruits", recruits::routes::routes(api_keys.clone()))
        .nest("/settings", settings::routes::routes(api_keys.clone()))
        .nest("/admin", admin::routes::routes(api_keys))
}
