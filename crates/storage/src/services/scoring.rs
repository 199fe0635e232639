use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Recruit, TypeWithPoints};

/// Point values and names of the known recruitment types, in listing order.
#[derive(Debug, Clone, Default)]
pub struct PointsTable {
    points: HashMap<Uuid, i64>,
    types: Vec<(Uuid, String)>,
}

impl PointsTable {
    pub fn from_types(types: &[TypeWithPoints]) -> Self {
        let points = types
            .iter()
            .filter_map(|t| t.points.map(|p| (t.type_id, i64::from(p))))
            .collect();
        let types = types.iter().map(|t| (t.type_id, t.name.clone())).collect();

        Self { points, types }
    }

    /// Points awarded for a recruit of `type_id`; 0 for unscored or unknown types.
    pub fn points_for_type(&self, type_id: Uuid) -> i64 {
        self.points.get(&type_id).copied().unwrap_or(0)
    }

    pub fn is_known(&self, type_id: Uuid) -> bool {
        self.types.iter().any(|(id, _)| *id == type_id)
    }

    pub fn types(&self) -> &[(Uuid, String)] {
        &self.types
    }
}

pub fn points_for(recruit: &Recruit, table: &PointsTable) -> i64 {
    table.points_for_type(recruit.type_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{recruit_type, sample_recruit};

    #[test]
    fn test_points_for_configured_type() {
        let papers = recruit_type("Papers", Some(2));
        let table = PointsTable::from_types(std::slice::from_ref(&papers));
        let recruit = sample_recruit(Uuid::new_v4(), papers.type_id);

        assert_eq!(points_for(&recruit, &table), 2);
    }

    #[test]
    fn test_unscored_type_is_zero() {
        let unscored = recruit_type("Referral", None);
        let table = PointsTable::from_types(std::slice::from_ref(&unscored));
        let recruit = sample_recruit(Uuid::new_v4(), unscored.type_id);

        assert!(table.is_known(unscored.type_id));
        assert_eq!(points_for(&recruit, &table), 0);
    }

    #[test]
    fn test_unknown_type_is_zero() {
        let table = PointsTable::from_types(&[recruit_type("Papers", Some(2))]);
        let recruit = sample_recruit(Uuid::new_v4(), Uuid::new_v4());

        assert!(!table.is_known(recruit.type_id));
        assert_eq!(points_for(&recruit, &table), 0);
    }
}
