use serde::{Deserialize, Serialize};

pub const DELETION_SUCCESSFUL: &str = "Deletion successful";

// -------------------------
// Response DTOs
// -------------------------

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionResponse {
    pub result: String,
}

impl DeletionResponse {
    pub fn successful() -> Self {
        Self {
            result: DELETION_SUCCESSFUL.to_string(),
        }
    }
}

/// Body returned by every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
