//! News domain entity
//!
//! A published news item. News is publicly authored and immutable after
//! creation; readers interact with it through comments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a news item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsId(pub Uuid);

impl NewsId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NewsId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for NewsId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NewsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A news item on the public feed
///
/// News has no owner and no write surface here; items are published
/// straight into the store.
#[derive(Debug, Clone, Serialize)]
pub struct News {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    /// Publication date; the home feed orders by this, newest first
    pub date: NaiveDate,
}
