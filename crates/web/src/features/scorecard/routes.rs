use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_scorecard, get_summary};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_scorecard))
        .route("/summary", get(get_summary))
}
