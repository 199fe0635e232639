use storage::{
    Database,
    dto::scorecard::{LeaderStats, ScorecardSummary},
    error::Result,
    models::Window,
    services::{compute_leaderboard, compute_summary},
};

/// Ranked leaderboard for the window
pub async fn get_leaderboard(db: &Database, window: &Window) -> Result<Vec<LeaderStats>> {
    compute_leaderboard(db, window).await
}

/// Competition-wide totals for the window
pub async fn get_summary(db: &Database, window: &Window) -> Result<ScorecardSummary> {
    compute_summary(db, window).await
}
