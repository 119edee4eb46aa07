//! Note domain entity
//!
//! A private note belonging to exactly one user, addressed by a globally
//! unique slug. Notes never leak across owners: every lookup is scoped to
//! the requesting user, so a non-owner observes not-found rather than
//! forbidden.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for NoteId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's note
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    /// Unique across all notes system-wide, not just per owner
    pub slug: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a note; the slug has already been validated or
/// derived by the time this exists
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: UserId,
}
