use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{list_points, set_points};
use crate::middleware::auth::{ApiKeys, require_admin};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(set_points))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin));

    Router::new().route("/", get(list_points)).merge(protected)
}
