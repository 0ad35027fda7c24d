use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-generated post identifier.
pub type PostId = i32;

/// Upper bound on the length of a post title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Post entity - a persisted blog post.
///
/// Posts are never mutated once stored; the only lifecycle transitions are
/// creation and hard deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Current UTC time at the precision every supported store keeps (microseconds).
    pub fn timestamp_now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

/// A validated, not yet persisted post.
///
/// Construction is the only place the presence rules are enforced, so any
/// `NewPost` handed to a repository is already valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
}

impl NewPost {
    /// Validate raw input. Empty strings count as missing.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Missing title or content".to_string(),
            ));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "Title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }

        Ok(Self { title, content })
    }

    /// Split into `(title, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }

    /// Attach store-generated fields.
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}
