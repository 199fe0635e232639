use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::error::{Result, StorageError};
use crate::models::{Leader, Recruit, TypeWithPoints, Window};
use crate::repository::{
    leader::LeaderRepository, points::PointsRepository, recruit::RecruitRepository,
};

/// Read side the scorecard engine pulls its inputs from.
///
/// Implementations must list leaders in a stable order (by name, then id);
/// the leaderboard uses that order to break ties.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list_leaders(&self) -> Result<Vec<Leader>>;

    async fn list_types_with_points(&self) -> Result<Vec<TypeWithPoints>>;

    /// Confirmed recruits of one leader dated inside `window`.
    async fn list_confirmed_recruits_for_leader(
        &self,
        leader_id: Uuid,
        window: &Window,
    ) -> Result<Vec<Recruit>>;

    /// Confirmed recruits of every leader dated inside `window`.
    async fn list_confirmed_recruits(&self, window: &Window) -> Result<Vec<Recruit>>;
}

#[async_trait]
impl EntryStore for Database {
    async fn list_leaders(&self) -> Result<Vec<Leader>> {
        LeaderRepository::new(self.pool())
            .list()
            .await
            .map_err(StorageError::unavailable_if_disconnected)
    }

    async fn list_types_with_points(&self) -> Result<Vec<TypeWithPoints>> {
        PointsRepository::new(self.pool())
            .list_types_with_points()
            .await
            .map_err(StorageError::unavailable_if_disconnected)
    }

    async fn list_confirmed_recruits_for_leader(
        &self,
        leader_id: Uuid,
        window: &Window,
    ) -> Result<Vec<Recruit>> {
        RecruitRepository::new(self.pool())
            .list_confirmed(Some(leader_id), window)
            .await
            .map_err(StorageError::unavailable_if_disconnected)
    }

    async fn list_confirmed_recruits(&self, window: &Window) -> Result<Vec<Recruit>> {
        RecruitRepository::new(self.pool())
            .list_confirmed(None, window)
            .await
            .map_err(StorageError::unavailable_if_disconnected)
    }
}
