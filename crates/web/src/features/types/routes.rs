use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use storage::Database;

use super::handlers::{create_type, delete_type, list_types, update_type};
use crate::middleware::auth::{ApiKeys, require_admin};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_type))
        .route("/:id", patch(update_type).delete(delete_type))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin));

    Router::new().route("/", get(list_types)).merge(protected)
}
