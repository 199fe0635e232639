use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new leader
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeaderRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255))]
    pub email: String,
}

/// Request payload for updating an existing leader
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLeaderRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255))]
    pub email: Option<String>,
}
