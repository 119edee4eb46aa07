//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL in production,
//! in-memory repositories in tests).
//!
//! Owner-scoped lookups (`*_and_author`) are the visibility mechanism for
//! comments and notes: a record that exists but belongs to someone else
//! resolves to `None`, exactly like a record that does not exist.

use async_trait::async_trait;

use crate::domain::entities::{
    Comment, CommentId, NewComment, NewNote, NewSession, NewUser, News, NewsId, Note, NoteId,
    User, UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for News entities
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Find a news item by ID
    async fn find_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError>;

    /// Most recent news first (date descending), truncated to `limit`
    async fn list_recent(&self, limit: u64) -> Result<Vec<News>, DomainError>;
}

/// Repository for Comment entities
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by ID, scoped to its author
    async fn find_by_id_and_author(
        &self,
        id: &CommentId,
        author_id: &UserId,
    ) -> Result<Option<Comment>, DomainError>;

    /// Comments for a news item in chronological order (created ascending)
    async fn list_for_news(&self, news_id: &NewsId) -> Result<Vec<Comment>, DomainError>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError>;

    /// Replace a comment's text
    async fn update_text(&self, id: &CommentId, text: &str) -> Result<Comment, DomainError>;

    /// Delete a comment
    async fn delete(&self, id: &CommentId) -> Result<(), DomainError>;
}

/// Repository for Note entities
///
/// `create` and `update` must rely on a store-level uniqueness guarantee
/// for the slug and report a collision as `DomainError::AlreadyExists`.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Find a note by slug regardless of owner (uniqueness pre-check)
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Note>, DomainError>;

    /// Find a note by slug, scoped to its owner
    async fn find_by_slug_and_author(
        &self,
        slug: &str,
        author_id: &UserId,
    ) -> Result<Option<Note>, DomainError>;

    /// All notes owned by a user, oldest first
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Note>, DomainError>;

    /// Create a note; slug collisions surface as `AlreadyExists`
    async fn create(&self, note: &NewNote) -> Result<Note, DomainError>;

    /// Update a note's title, text and slug; slug collisions surface as
    /// `AlreadyExists`
    async fn update(&self, note: &Note) -> Result<Note, DomainError>;

    /// Delete a note
    async fn delete(&self, id: &NoteId) -> Result<(), DomainError>;
}

/// Store for login sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session
    async fn insert(&self, session: &NewSession) -> Result<(), DomainError>;

    /// Resolve a session token to the user it belongs to
    async fn find_user_id(&self, token: &str) -> Result<Option<UserId>, DomainError>;

    /// Drop a session; unknown tokens are not an error
    async fn delete(&self, token: &str) -> Result<(), DomainError>;
}
