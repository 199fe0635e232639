use std::collections::HashMap;

use futures::future::try_join_all;
use uuid::Uuid;

use crate::dto::scorecard::{LeaderStats, TypeBreakdown};
use crate::error::Result;
use crate::models::{Leader, Recruit, Window};
use crate::services::entry_store::EntryStore;
use crate::services::period::previous_window;
use crate::services::scoring::{PointsTable, points_for};

/// Scores of one leader's recruit set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderTally {
    pub total_points: i64,
    pub recruits_count: i64,
    pub period_points: i64,
    pub period_recruits_count: i64,
    pub breakdown: Vec<TypeBreakdown>,
}

/// Score a leader's recruits. Totals cover every confirmed recruit passed in;
/// the period figures only those dated inside `period`.
pub fn tally(recruits: &[Recruit], table: &PointsTable, period: &Window) -> LeaderTally {
    let mut per_type: HashMap<Uuid, (i64, i64)> = HashMap::new();
    let mut result = LeaderTally::default();

    for recruit in recruits.iter().filter(|r| r.is_confirmed()) {
        let points = points_for(recruit, table);

        result.total_points += points;
        result.recruits_count += 1;

        let entry = per_type.entry(recruit.type_id).or_default();
        entry.0 += points;
        entry.1 += 1;

        if period.contains(recruit.date) {
            result.period_points += points;
            result.period_recruits_count += 1;
        }
    }

    result.breakdown = table
        .types()
        .iter()
        .map(|(type_id, name)| {
            let (points, recruits) = per_type.get(type_id).copied().unwrap_or_default();
            TypeBreakdown {
                type_id: *type_id,
                type_name: name.clone(),
                points,
                recruits,
            }
        })
        .collect();

    result
}

/// Indices of `totals` ordered by descending total. Ties keep input order.
pub fn rank_order(totals: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..totals.len()).collect();
    order.sort_by(|&a, &b| totals[b].cmp(&totals[a]));
    order
}

/// Fetch confirmed recruits for each leader concurrently. Any failed fetch
/// fails the whole batch.
async fn fetch_confirmed_per_leader<S>(
    store: &S,
    leader_ids: &[Uuid],
    window: &Window,
) -> Result<Vec<Vec<Recruit>>>
where
    S: EntryStore + ?Sized,
{
    try_join_all(
        leader_ids
            .iter()
            .map(|leader_id| store.list_confirmed_recruits_for_leader(*leader_id, window)),
    )
    .await
}

/// Rank of each leader over `previous`, ranked by points earned inside it.
/// Only leaders with a confirmed recruit dated on or before the end of
/// `previous` take part; the rest have no history to compare against.
async fn previous_ranks<S>(
    store: &S,
    leaders: &[Leader],
    all_time: &[Vec<Recruit>],
    table: &PointsTable,
    previous: &Window,
) -> Result<HashMap<Uuid, i64>>
where
    S: EntryStore + ?Sized,
{
    let eligible: Vec<Uuid> = leaders
        .iter()
        .zip(all_time)
        .filter(|(_, recruits)| has_history_before(recruits, previous))
        .map(|(leader, _)| leader.leader_id)
        .collect();

    let recruits = fetch_confirmed_per_leader(store, &eligible, previous).await?;
    let totals: Vec<i64> = recruits
        .iter()
        .map(|set| tally(set, table, previous).total_points)
        .collect();

    Ok(rank_order(&totals)
        .into_iter()
        .zip(1..)
        .map(|(index, rank)| (eligible[index], rank))
        .collect())
}

fn has_history_before(recruits: &[Recruit], previous: &Window) -> bool {
    recruits
        .iter()
        .any(|r| r.is_confirmed() && previous.to.is_none_or(|to| r.date <= to))
}

/// Build the ranked leaderboard for `window`.
///
/// Leaders are ranked by all-time points. When `window` is fully bounded the
/// ranking is compared against the ranking of the equally long window right
/// before it. The result is all-or-nothing: a single failed fetch fails the
/// whole computation.
pub async fn compute_leaderboard<S>(store: &S, window: &Window) -> Result<Vec<LeaderStats>>
where
    S: EntryStore + ?Sized,
{
    window.validate()?;

    let leaders = store.list_leaders().await?;
    let table = PointsTable::from_types(&store.list_types_with_points().await?);

    let leader_ids: Vec<Uuid> = leaders.iter().map(|l| l.leader_id).collect();
    let all_time = fetch_confirmed_per_leader(store, &leader_ids, &Window::unbounded()).await?;

    for recruit in all_time.iter().flatten() {
        if !table.is_known(recruit.type_id) {
            tracing::warn!(
                recruit_id = %recruit.recruit_id,
                type_id = %recruit.type_id,
                "Recruit references an unknown recruitment type, scoring it as 0"
            );
        }
    }

    let previous = match previous_window(window) {
        Some(previous) => previous_ranks(store, &leaders, &all_time, &table, &previous).await?,
        None => HashMap::new(),
    };

    let mut scored: Vec<(Leader, LeaderTally)> = leaders
        .into_iter()
        .zip(all_time.iter().map(|recruits| tally(recruits, &table, window)))
        .collect();
    // Stable, so ties keep the store's leader order.
    scored.sort_by(|a, b| b.1.total_points.cmp(&a.1.total_points));

    let board: Vec<LeaderStats> = scored
        .into_iter()
        .zip(1..)
        .map(|((leader, tally), rank)| {
            let previous_rank = previous.get(&leader.leader_id).copied();

            LeaderStats {
                rank,
                total_points: tally.total_points,
                recruits_count: tally.recruits_count,
                period_points: tally.period_points,
                period_recruits_count: tally.period_recruits_count,
                breakdown: tally.breakdown,
                rank_change: previous_rank.map_or(0, |previous| previous - rank),
                previous_rank,
                leader,
            }
        })
        .collect();

    tracing::debug!(
        leaders = board.len(),
        has_previous_period = !previous.is_empty(),
        "Leaderboard computed"
    );

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    use crate::error::StorageError;
    use crate::models::RecruitStatus;
    use crate::services::testing::MemoryStore;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    fn week() -> Window {
        Window::between(at(10), at(16))
    }

    /// Sarah: three confirmed Papers recruits, one inside the week.
    /// Mike: one confirmed New Starter recruit inside the week.
    fn sarah_and_mike() -> (MemoryStore, Uuid, Uuid) {
        let mut store = MemoryStore::default();
        let papers = store.add_type("Papers", Some(2));
        let new_starter = store.add_type("New Starter", Some(10));
        let sarah = store.add_leader("Sarah");
        let mike = store.add_leader("Mike");

        store.add_recruit(sarah, papers, at(1), RecruitStatus::Confirmed);
        store.add_recruit(sarah, papers, at(2), RecruitStatus::Confirmed);
        store.add_recruit(sarah, papers, at(12), RecruitStatus::Confirmed);
        store.add_recruit(mike, new_starter, at(11), RecruitStatus::Confirmed);

        (store, sarah, mike)
    }

    #[tokio::test]
    async fn test_sarah_and_mike_ranking() {
        let (store, sarah, mike) = sarah_and_mike();

        let board = compute_leaderboard(&store, &week()).await.unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].leader.leader_id, mike);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].total_points, 10);
        assert_eq!(board[0].period_points, 10);
        assert_eq!(board[0].period_recruits_count, 1);

        assert_eq!(board[1].leader.leader_id, sarah);
        assert_eq!(board[1].rank, 2);
        assert_eq!(board[1].total_points, 6);
        assert_eq!(board[1].recruits_count, 3);
        assert_eq!(board[1].period_points, 2);
        assert_eq!(board[1].period_recruits_count, 1);
    }

    #[tokio::test]
    async fn test_total_points_match_scoring_function() {
        let (store, _, _) = sarah_and_mike();
        let table = PointsTable::from_types(&store.types);

        let board = compute_leaderboard(&store, &Window::unbounded()).await.unwrap();

        for stats in &board {
            let expected: i64 = store
                .recruits
                .iter()
                .filter(|r| r.leader_id == stats.leader.leader_id && r.is_confirmed())
                .map(|r| points_for(r, &table))
                .sum();
            assert_eq!(stats.total_points, expected);
        }
        for pair in board.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
        }
    }

    #[tokio::test]
    async fn test_breakdown_covers_every_type() {
        let (store, sarah, _) = sarah_and_mike();

        let board = compute_leaderboard(&store, &week()).await.unwrap();
        let sarah_stats = board
            .iter()
            .find(|s| s.leader.leader_id == sarah)
            .unwrap();

        let names: Vec<&str> = sarah_stats
            .breakdown
            .iter()
            .map(|b| b.type_name.as_str())
            .collect();
        assert_eq!(names, vec!["New Starter", "Papers"]);
        assert_eq!(sarah_stats.breakdown[0].points, 0);
        assert_eq!(sarah_stats.breakdown[1].points, 6);
        assert_eq!(sarah_stats.breakdown[1].recruits, 3);
    }

    #[tokio::test]
    async fn test_no_recruits_keeps_store_order() {
        let mut store = MemoryStore::default();
        store.add_type("Papers", Some(2));
        let ids: Vec<Uuid> = ["Ava", "Ben", "Cleo"]
            .into_iter()
            .map(|name| store.add_leader(name))
            .collect();

        let board = compute_leaderboard(&store, &Window::unbounded()).await.unwrap();

        let order: Vec<Uuid> = board.iter().map(|s| s.leader.leader_id).collect();
        assert_eq!(order, ids);
        for stats in &board {
            assert_eq!(stats.total_points, 0);
            assert_eq!(stats.rank_change, 0);
            assert_eq!(stats.previous_rank, None);
        }
    }

    #[tokio::test]
    async fn test_submitted_recruits_never_count() {
        let mut store = MemoryStore::default();
        let established = store.add_type("Established", Some(20));
        let leader = store.add_leader("Dana");
        store.add_recruit(leader, established, at(11), RecruitStatus::Submitted);
        store.add_recruit(leader, established, at(1), RecruitStatus::Submitted);

        for window in [Window::unbounded(), week()] {
            let board = compute_leaderboard(&store, &window).await.unwrap();
            assert_eq!(board[0].total_points, 0);
            assert_eq!(board[0].recruits_count, 0);
            assert_eq!(board[0].period_points, 0);
        }
    }

    #[tokio::test]
    async fn test_unscored_type_counts_recruits_but_no_points() {
        let mut store = MemoryStore::default();
        let referral = store.add_type("Referral", None);
        let leader = store.add_leader("Eli");
        store.add_recruit(leader, referral, at(11), RecruitStatus::Confirmed);

        let board = compute_leaderboard(&store, &week()).await.unwrap();

        assert_eq!(board[0].total_points, 0);
        assert_eq!(board[0].recruits_count, 1);
        assert_eq!(board[0].period_recruits_count, 1);
    }

    #[tokio::test]
    async fn test_rank_change_against_previous_week() {
        let mut store = MemoryStore::default();
        let papers = store.add_type("Papers", Some(2));
        let established = store.add_type("Established", Some(20));
        let ava = store.add_leader("Ava");
        let ben = store.add_leader("Ben");

        // Previous week: Ava ahead. Current ranking: Ben ahead overall.
        store.add_recruit(ava, papers, at(5), RecruitStatus::Confirmed);
        store.add_recruit(ben, papers, at(1), RecruitStatus::Confirmed);
        store.add_recruit(ben, established, at(11), RecruitStatus::Confirmed);

        let board = compute_leaderboard(&store, &week()).await.unwrap();

        assert_eq!(board[0].leader.leader_id, ben);
        assert_eq!(board[0].previous_rank, Some(2));
        assert_eq!(board[0].rank_change, 1);

        assert_eq!(board[1].leader.leader_id, ava);
        assert_eq!(board[1].previous_rank, Some(1));
        assert_eq!(board[1].rank_change, -1);

        for stats in &board {
            assert_eq!(
                stats.rank_change,
                stats.previous_rank.unwrap() - stats.rank
            );
        }
    }

    #[tokio::test]
    async fn test_open_window_has_no_rank_change() {
        let (store, _, _) = sarah_and_mike();

        let window = Window::new(Some(at(10)), None);
        let board = compute_leaderboard(&store, &window).await.unwrap();

        for stats in &board {
            assert_eq!(stats.rank_change, 0);
            assert_eq!(stats.previous_rank, None);
        }
    }

    #[tokio::test]
    async fn test_leader_without_history_is_unranked_in_previous_period() {
        let (mut store, sarah, mike) = sarah_and_mike();
        let newcomer = store.add_leader("Nia");

        let board = compute_leaderboard(&store, &week()).await.unwrap();
        let find = |id: Uuid| board.iter().find(|s| s.leader.leader_id == id).unwrap();

        // Nia has no recruits, Mike only has recruits inside the current week.
        for id in [newcomer, mike] {
            assert_eq!(find(id).previous_rank, None);
            assert_eq!(find(id).rank_change, 0);
        }
        assert_eq!(find(sarah).previous_rank, Some(1));
        assert_eq!(find(sarah).rank_change, 1 - find(sarah).rank);
    }

    #[tokio::test]
    async fn test_backdated_recruit_ranks_recently_created_leader() {
        let mut store = MemoryStore::default();
        let papers = store.add_type("Papers", Some(2));
        let ava = store.add_leader("Ava");
        let ben = store.add_leader("Ben");
        store.set_leader_created_at(ava, at(8));
        store.set_leader_created_at(ben, at(8));

        // Attributed to the previous week although Ava was registered later.
        store.add_recruit(ava, papers, at(5), RecruitStatus::Confirmed);
        store.add_recruit(ben, papers, at(11), RecruitStatus::Confirmed);
        store.add_recruit(ben, papers, at(12), RecruitStatus::Confirmed);

        let board = compute_leaderboard(&store, &week()).await.unwrap();

        assert_eq!(board[0].leader.leader_id, ben);
        assert_eq!(board[0].previous_rank, None);
        assert_eq!(board[0].rank_change, 0);

        assert_eq!(board[1].leader.leader_id, ava);
        assert_eq!(board[1].previous_rank, Some(1));
        assert_eq!(board[1].rank_change, -1);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let (store, _, _) = sarah_and_mike();

        let first = compute_leaderboard(&store, &week()).await.unwrap();
        let second = compute_leaderboard(&store, &week()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_store_failure_yields_no_leaderboard() {
        let (mut store, _, _) = sarah_and_mike();
        store.fail_leader_fetches = true;

        let result = compute_leaderboard(&store, &week()).await;

        assert!(matches!(result, Err(StorageError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_reversed_window_is_rejected() {
        let (store, _, _) = sarah_and_mike();

        let result = compute_leaderboard(&store, &Window::between(at(16), at(10))).await;

        assert!(matches!(result, Err(StorageError::InvalidWindow(_))));
        assert_eq!(store.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_length_window() {
        let (store, _, mike) = sarah_and_mike();

        let board = compute_leaderboard(&store, &Window::between(at(11), at(11)))
            .await
            .unwrap();

        assert_eq!(board[0].leader.leader_id, mike);
        assert_eq!(board[0].period_recruits_count, 1);
        assert_eq!(board[1].period_recruits_count, 0);
    }

    #[test]
    fn test_rank_order_is_stable_for_ties() {
        assert_eq!(rank_order(&[5, 9, 5, 9, 0]), vec![1, 3, 0, 2, 4]);
        assert!(rank_order(&[]).is_empty());
    }

    #[test]
    fn test_tally_period_bounds_are_inclusive() {
        let mut store = MemoryStore::default();
        let papers = store.add_type("Papers", Some(2));
        let leader = store.add_leader("Ava");
        store.add_recruit(leader, papers, at(10), RecruitStatus::Confirmed);
        store.add_recruit(leader, papers, at(16), RecruitStatus::Confirmed);
        store.add_recruit(
            leader,
            papers,
            at(16) + TimeDelta::seconds(1),
            RecruitStatus::Confirmed,
        );

        let table = PointsTable::from_types(&store.types);
        let result = tally(&store.recruits, &table, &week());

        assert_eq!(result.total_points, 6);
        assert_eq!(result.period_points, 4);
        assert_eq!(result.period_recruits_count, 2);
    }
}
