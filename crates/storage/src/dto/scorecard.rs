use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Leader, Window};

/// Scorecard query window. Both bounds are optional RFC 3339 timestamps.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ScorecardQuery {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl ScorecardQuery {
    pub fn window(&self) -> Window {
        Window::new(self.date_from, self.date_to)
    }
}

/// Points and recruit count a leader earned for a single recruitment type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypeBreakdown {
    pub type_id: Uuid,
    pub type_name: String,
    pub points: i64,
    pub recruits: i64,
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderStats {
    pub rank: i64,
    #[serde(flatten)]
    pub leader: Leader,
    /// All-time points over confirmed recruits.
    pub total_points: i64,
    /// All-time confirmed recruits.
    pub recruits_count: i64,
    pub period_points: i64,
    pub period_recruits_count: i64,
    pub breakdown: Vec<TypeBreakdown>,
    /// `previous_rank - rank`; positive means the leader moved up. Zero when
    /// there is nothing to compare against.
    pub rank_change: i64,
    /// Absent when no previous period exists or the leader was not yet
    /// competing in it.
    pub previous_rank: Option<i64>,
}

/// Competition-wide totals for a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScorecardSummary {
    pub total_score: i64,
    pub total_score_change: i64,
    pub total_recruits: i64,
    pub total_recruits_change: i64,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub previous_period_start: Option<DateTime<Utc>>,
    pub previous_period_end: Option<DateTime<Utc>>,
}
