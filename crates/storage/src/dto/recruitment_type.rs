use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTypeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTypeRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// Sets the point value of a recruitment type, replacing any existing value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertPointsRequest {
    pub type_id: Uuid,

    #[validate(range(min = 0, message = "Points must not be negative"))]
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_points_rejected() {
        let request = UpsertPointsRequest {
            type_id: Uuid::new_v4(),
            points: -1,
        };
        assert!(request.validate().is_err());

        let request = UpsertPointsRequest {
            type_id: Uuid::new_v4(),
            points: 0,
        };
        assert!(request.validate().is_ok());
    }
}
