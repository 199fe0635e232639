use chrono::{DateTime, Utc};

use crate::dto::scorecard::ScorecardSummary;
use crate::error::Result;
use crate::models::{Recruit, Window};
use crate::services::entry_store::EntryStore;
use crate::services::period::previous_window;
use crate::services::scoring::{PointsTable, points_for};

/// Competition-wide points and recruit count of confirmed recruits in `window`.
fn totals(recruits: &[Recruit], table: &PointsTable, window: &Window) -> (i64, i64) {
    recruits
        .iter()
        .filter(|r| r.is_confirmed() && window.contains(r.date))
        .fold((0, 0), |(score, count), r| (score + points_for(r, table), count + 1))
}

/// Competition-wide totals for `window` and their change since the previous
/// equally long window. Changes are 0 when `window` is not fully bounded.
pub async fn compute_summary<S>(store: &S, window: &Window) -> Result<ScorecardSummary>
where
    S: EntryStore + ?Sized,
{
    window.validate()?;

    let table = PointsTable::from_types(&store.list_types_with_points().await?);

    let current = store.list_confirmed_recruits(window).await?;
    let (total_score, total_recruits) = totals(&current, &table, window);

    let previous = previous_window(window);
    let (total_score_change, total_recruits_change) = match &previous {
        Some(previous) => {
            let recruits = store.list_confirmed_recruits(previous).await?;
            let (previous_score, previous_recruits) = totals(&recruits, &table, previous);
            (
                total_score - previous_score,
                total_recruits - previous_recruits,
            )
        }
        None => (0, 0),
    };

    Ok(ScorecardSummary {
        total_score,
        total_score_change,
        total_recruits,
        total_recruits_change,
        period_start: window.from.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        period_end: window.to.unwrap_or_else(Utc::now),
        previous_period_start: previous.and_then(|p| p.from),
        previous_period_end: previous.and_then(|p| p.to),
    })
}
