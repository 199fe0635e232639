use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scorecard::{LeaderStats, ScorecardQuery, ScorecardSummary},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scorecard",
    params(ScorecardQuery),
    responses(
        (status = 200, description = "Leaders ranked by total points", body = Vec<LeaderStats>),
        (status = 400, description = "dateTo is before dateFrom"),
        (status = 503, description = "Entry store unavailable")
    ),
    tag = "scorecard"
)]
pub async fn get_scorecard(
    State(db): State<Database>,
    Query(query): Query<ScorecardQuery>,
) -> Result<Response, WebError> {
    let window = query.window();
    tracing::debug!(from = ?window.from, to = ?window.to, "Computing leaderboard");

    let leaderboard = services::get_leaderboard(&db, &window).await?;

    Ok(Json(leaderboard).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scorecard/summary",
    params(ScorecardQuery),
    responses(
        (status = 200, description = "Competition-wide totals for the period", body = ScorecardSummary),
        (status = 400, description = "dateTo is before dateFrom"),
        (status = 503, description = "Entry store unavailable")
    ),
    tag = "scorecard"
)]
pub async fn get_summary(
    State(db): State<Database>,
    Query(query): Query<ScorecardQuery>,
) -> Result<Response, WebError> {
    let summary = services::get_summary(&db, &query.window()).await?;

    Ok(Json(summary).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_query_reads_camel_case_bounds() {
        let uri: Uri = "/api/scorecard?dateFrom=2025-03-10T00:00:00Z&dateTo=2025-03-16T23:59:59Z"
            .parse()
            .unwrap();

        let Query(query) = Query::<ScorecardQuery>::try_from_uri(&uri).unwrap();
        let window = query.window();

        let from: DateTime<Utc> = "2025-03-10T00:00:00Z".parse().unwrap();
        let to: DateTime<Utc> = "2025-03-16T23:59:59Z".parse().unwrap();
        assert_eq!(window.from, Some(from));
        assert_eq!(window.to, Some(to));
    }

    #[test]
    fn test_query_without_bounds_is_unbounded() {
        let uri: Uri = "/api/scorecard".parse().unwrap();

        let Query(query) = Query::<ScorecardQuery>::try_from_uri(&uri).unwrap();

        assert!(!query.window().is_bounded());
        assert_eq!(query.window().from, None);
    }

    #[test]
    fn test_query_ignores_snake_case_names() {
        let uri: Uri = "/api/scorecard?date_from=2025-03-10T00:00:00Z".parse().unwrap();

        let Query(query) = Query::<ScorecardQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(query.window().from, None);
    }
}
