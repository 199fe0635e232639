//! In-memory `EntryStore` used by the scorecard tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Leader, Recruit, RecruitStatus, TypeWithPoints, Window};
use crate::services::entry_store::EntryStore;

fn epoch_of_competition() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub(crate) fn recruit_type(name: &str, points: Option<i32>) -> TypeWithPoints {
    TypeWithPoints {
        type_id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: epoch_of_competition(),
        points,
    }
}

pub(crate) fn sample_recruit(leader_id: Uuid, type_id: Uuid) -> Recruit {
    Recruit {
        recruit_id: Uuid::new_v4(),
        name: "Jamie Recruit".to_string(),
        leader_id,
        type_id,
        date: epoch_of_competition(),
        mobile: "0400 000 000".to_string(),
        email: "jamie@example.com".to_string(),
        notes: None,
        status: RecruitStatus::Confirmed,
        created_at: epoch_of_competition(),
        updated_at: epoch_of_competition(),
    }
}

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub leaders: Vec<Leader>,
    pub types: Vec<TypeWithPoints>,
    pub recruits: Vec<Recruit>,
    pub fail_leader_fetches: bool,
    pub fail_all_fetches: bool,
    fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn add_leader(&mut self, name: &str) -> Uuid {
        let leader = Leader {
            leader_id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: epoch_of_competition(),
        };
        let id = leader.leader_id;
        self.leaders.push(leader);
        id
    }

    pub fn set_leader_created_at(&mut self, leader_id: Uuid, created_at: DateTime<Utc>) {
        if let Some(leader) = self.leaders.iter_mut().find(|l| l.leader_id == leader_id) {
            leader.created_at = created_at;
        }
    }

    pub fn add_type(&mut self, name: &str, points: Option<i32>) -> Uuid {
        let recruitment_type = recruit_type(name, points);
        let id = recruitment_type.type_id;
        self.types.push(recruitment_type);
        id
    }

    pub fn add_recruit(
        &mut self,
        leader_id: Uuid,
        type_id: Uuid,
        date: DateTime<Utc>,
        status: RecruitStatus,
    ) -> Uuid {
        let recruit = Recruit {
            date,
            status,
            ..sample_recruit(leader_id, type_id)
        };
        let id = recruit.recruit_id;
        self.recruits.push(recruit);
        id
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn record_fetch(&self) -> Result<()> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_all_fetches {
            return Err(StorageError::StoreUnavailable(
                "memory store is offline".to_string(),
            ));
        }
        Ok(())
    }

    fn confirmed_in(&self, window: &Window) -> impl Iterator<Item = &Recruit> {
        self.recruits
            .iter()
            .filter(move |r| r.is_confirmed() && window.contains(r.date))
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list_leaders(&self) -> Result<Vec<Leader>> {
        self.record_fetch()?;
        let mut leaders = self.leaders.clone();
        leaders.sort_by(|a, b| a.name.cmp(&b.name).then(a.leader_id.cmp(&b.leader_id)));
        Ok(leaders)
    }

    async fn list_types_with_points(&self) -> Result<Vec<TypeWithPoints>> {
        self.record_fetch()?;
        let mut types = self.types.clone();
        types.sort_by(|a, b| a.name.cmp(&b.name).then(a.type_id.cmp(&b.type_id)));
        Ok(types)
    }

    async fn list_confirmed_recruits_for_leader(
        &self,
        leader_id: Uuid,
        window: &Window,
    ) -> Result<Vec<Recruit>> {
        self.record_fetch()?;
        if self.fail_leader_fetches {
            return Err(StorageError::StoreUnavailable(format!(
                "failed to fetch recruits of leader {leader_id}"
            )));
        }

        Ok(self
            .confirmed_in(window)
            .filter(|r| r.leader_id == leader_id)
            .cloned()
            .collect())
    }

    async fn list_confirmed_recruits(&self, window: &Window) -> Result<Vec<Recruit>> {
        self.record_fetch()?;
        Ok(self.confirmed_in(window).cloned().collect())
    }
}
