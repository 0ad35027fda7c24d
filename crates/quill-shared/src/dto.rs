//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/posts`.
///
/// Both fields are optional on the wire so that a missing field surfaces as a
/// validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A post as returned by the API.
///
/// Field order is part of the contract: `id`, `title`, `content`, `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// RFC 3339 (ISO-8601) UTC timestamp.
    pub created_at: DateTime<Utc>,
}
