use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for mutations that return no resource
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(example = "Category has been updated successfully!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
