use axum::{
    Router, middleware,
    routing::{get, patch},
};
use storage::Database;

use super::handlers::{get_settings, update_settings};
use crate::middleware::auth::{ApiKeys, require_admin};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", patch(update_settings))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin));

    Router::new().route("/", get(get_settings)).merge(protected)
}
