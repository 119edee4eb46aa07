//! Comment domain entity
//!
//! A reader comment attached to a news item. Comments belong to their
//! author: only the author may edit or delete one, and for everyone else
//! the comment simply does not resolve.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::news::NewsId;
use super::user::UserId;

/// Unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CommentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment under a news item
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub news_id: NewsId,
    pub author_id: UserId,
    pub text: String,
    /// Set at insert; the detail page lists comments in this order, oldest first
    pub created: DateTime<Utc>,
}

/// Data needed to create a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub news_id: NewsId,
    pub author_id: UserId,
    pub text: String,
}
