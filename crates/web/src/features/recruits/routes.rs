use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use storage::Database;

use super::handlers::{
    confirm_recruit, delete_recruit, get_recruit, list_recruits, reject_recruit, submit_recruit,
    update_status,
};
use crate::middleware::auth::{ApiKeys, require_admin, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let recruiter = Router::new()
        .route("/", get(list_recruits))
        .route("/:id", get(get_recruit))
        .route_layer(middleware::from_fn_with_state(
            api_keys.clone(),
            require_auth,
        ));

    let admin = Router::new()
        .route("/:id", delete(delete_recruit))
        .route("/:id/confirm", post(confirm_recruit))
        .route("/:id/reject", post(reject_recruit))
        .route("/:id/status", patch(update_status))
        .route_layer(middleware::from_fn_with_state(api_keys, require_admin));

    Router::new()
        .route("/", post(submit_recruit))
        .merge(recruiter)
        .merge(admin)
}
