use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Window;

pub const COMPETITION_START_KEY: &str = "competition_start";
pub const COMPETITION_END_KEY: &str = "competition_end";

/// Configured competition period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionSettings {
    pub competition_start: Option<DateTime<Utc>>,
    pub competition_end: Option<DateTime<Utc>>,
}

impl CompetitionSettings {
    pub fn window(&self) -> Window {
        Window::new(self.competition_start, self.competition_end)
    }

    /// Overlays the fields present in `update` onto the current settings.
    pub fn merged_with(&self, update: &UpdateSettingsRequest) -> Self {
        Self {
            competition_start: update.competition_start.or(self.competition_start),
            competition_end: update.competition_end.or(self.competition_end),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub competition_start: Option<DateTime<Utc>>,
    pub competition_end: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unset_fields() {
        let current = CompetitionSettings {
            competition_start: Some("2025-01-01T00:00:00Z".parse().unwrap()),
            competition_end: Some("2025-06-30T00:00:00Z".parse().unwrap()),
        };
        let update = UpdateSettingsRequest {
            competition_start: None,
            competition_end: Some("2025-12-31T00:00:00Z".parse().unwrap()),
        };

        let merged = current.merged_with(&update);
        assert_eq!(merged.competition_start, current.competition_start);
        assert_eq!(merged.competition_end, update.competition_end);
        assert!(merged.window().validate().is_ok());
    }
}
