use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use storage::Database;

use super::handlers::{create_leader, delete_leader, get_leader, list_leaders, update_leader};
use crate::middleware::auth::{ApiKeys, require_admin};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_leader))
        .route("/:id", patch(update_leader).delete(delete_leader))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin));

    Router::new()
        .route("/", get(list_leaders))
        .route("/:id", get(get_leader))
        .merge(protected)
}
