use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

/// Body of `GET /hello`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}
