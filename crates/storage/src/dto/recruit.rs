use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::PaginationParams;
use crate::models::{Recruit, RecruitStatus};

/// Public or internal submission of a recruit. Always stored as `Submitted`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecruitRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub leader_id: Uuid,

    pub type_id: Uuid,

    pub date: DateTime<Utc>,

    #[validate(length(min = 1, max = 50, message = "Mobile is required"))]
    pub mobile: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecruitStatusRequest {
    pub status: RecruitStatus,
}

/// Query parameters for listing recruits
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecruitFilter {
    pub status: Option<RecruitStatus>,
    pub leader_id: Option<Uuid>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    #[serde(default = "super::common::default_page")]
    pub page: u32,
    #[serde(default = "super::common::default_page_size")]
    pub page_size: u32,
}

impl RecruitFilter {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()?;

        if let (Some(from), Some(to)) = (self.date_from, self.date_to)
            && to < from
        {
            return Err("date_to must not be before date_from".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderSummary {
    pub leader_id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeSummary {
    pub type_id: Uuid,
    pub name: String,
}

/// A recruit together with its leader and recruitment type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecruitWithRelations {
    #[serde(flatten)]
    pub recruit: Recruit,
    pub leader: LeaderSummary,
    #[serde(rename = "type")]
    pub recruitment_type: TypeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> RecruitFilter {
        RecruitFilter {
            status: None,
            leader_id: None,
            date_from: None,
            date_to: None,
            page: 1,
            page_size: 50,
        }
    }

    #[test]
    fn test_filter_rejects_reversed_dates() {
        let mut f = filter();
        f.date_from = Some("2025-03-10T00:00:00Z".parse().unwrap());
        f.date_to = Some("2025-03-01T00:00:00Z".parse().unwrap());
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_filter_rejects_oversized_page() {
        let mut f = filter();
        f.page_size = 500;
        assert!(f.validate().is_err());
        assert!(filter().validate().is_ok());
    }

    #[test]
    fn test_recruit_request_requires_mobile() {
        let request = CreateRecruitRequest {
            name: "Jamie".to_string(),
            leader_id: Uuid::new_v4(),
            type_id: Uuid::new_v4(),
            date: Utc::now(),
            mobile: String::new(),
            email: "jamie@example.com".to_string(),
            notes: None,
        };
        assert!(request.validate().is_err());
    }
}
