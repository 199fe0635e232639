use axum::{Router, middleware, routing::post};
use storage::Database;

use super::handlers::seed;
use crate::middleware::auth::{ApiKeys, require_admin};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/seed", post(seed))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin))
}
