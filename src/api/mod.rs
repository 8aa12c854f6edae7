use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod attendance;
pub mod department;
pub mod employee;
pub mod health;
pub mod statistics;


#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Employee not found")]
    pub error: String,
}
