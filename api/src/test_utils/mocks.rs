//! In-memory implementations of the repository ports
//!
//! These store data behind an `RwLock` and mirror the store-level
//! guarantees that matter to the services, in particular slug and username
//! uniqueness. Each one carries seed (`add`) and inspection (`count`,
//! `get`) helpers for tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{
    Comment, CommentId, NewComment, NewNote, NewSession, NewUser, News, NewsId, Note, NoteId,
    User, UserId,
};
use crate::domain::ports::{
    CommentRepository, NewsRepository, NoteRepository, SessionStore, UserRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user
    pub fn add(&self, user: User) {
        self.users.write().unwrap().insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::AlreadyExists(format!(
                "username '{}'",
                new_user.username
            )));
        }

        let user = User {
            id: UserId(Uuid::new_v4()),
            username: new_user.username.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }
}

// ============================================================================
// In-Memory News Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNewsRepository {
    news: Arc<RwLock<HashMap<NewsId, News>>>,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a news item
    pub fn add(&self, news: News) {
        self.news.write().unwrap().insert(news.id, news);
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError> {
        Ok(self.news.read().unwrap().get(id).cloned())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<News>, DomainError> {
        let mut items: Vec<News> = self.news.read().unwrap().values().cloned().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(limit as usize);
        Ok(items)
    }
}

// ============================================================================
// In-Memory Comment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<CommentId, Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a comment
    pub fn add(&self, comment: Comment) {
        self.comments.write().unwrap().insert(comment.id, comment);
    }

    pub fn count(&self) -> usize {
        self.comments.read().unwrap().len()
    }

    pub fn get(&self, id: &CommentId) -> Option<Comment> {
        self.comments.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id_and_author(
        &self,
        id: &CommentId,
        author_id: &UserId,
    ) -> Result<Option<Comment>, DomainError> {
        Ok(self
            .comments
            .read()
            .unwrap()
            .get(id)
            .filter(|c| c.author_id == *author_id)
            .cloned())
    }

    async fn list_for_news(&self, news_id: &NewsId) -> Result<Vec<Comment>, DomainError> {
        let mut items: Vec<Comment> = self
            .comments
            .read()
            .unwrap()
            .values()
            .filter(|c| c.news_id == *news_id)
            .cloned()
            .collect();
        items.sort_by_key(|c| c.created);
        Ok(items)
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let comment = Comment {
            id: CommentId(Uuid::new_v4()),
            news_id: comment.news_id,
            author_id: comment.author_id,
            text: comment.text.clone(),
            created: Utc::now(),
        };
        self.comments
            .write()
            .unwrap()
            .insert(comment.id, comment.clone());

        Ok(comment)
    }

    async fn update_text(&self, id: &CommentId, text: &str) -> Result<Comment, DomainError> {
        let mut comments = self.comments.write().unwrap();
        let comment = comments
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Comment {} not found", id)))?;
        comment.text = text.to_string();

        Ok(comment.clone())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), DomainError> {
        self.comments
            .write()
            .unwrap()
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Comment {} not found", id)))?;

        Ok(())
    }
}

// ============================================================================
// In-Memory Note Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<NoteId, Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a note
    pub fn add(&self, note: Note) {
        self.notes.write().unwrap().insert(note.id, note);
    }

    pub fn count(&self) -> usize {
        self.notes.read().unwrap().len()
    }

    pub fn get(&self, id: &NoteId) -> Option<Note> {
        self.notes.read().unwrap().get(id).cloned()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Note> {
        self.notes
            .read()
            .unwrap()
            .values()
            .find(|n| n.slug == slug)
            .cloned()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Note>, DomainError> {
        Ok(self.get_by_slug(slug))
    }

    async fn find_by_slug_and_author(
        &self,
        slug: &str,
        author_id: &UserId,
    ) -> Result<Option<Note>, DomainError> {
        Ok(self
            .notes
            .read()
            .unwrap()
            .values()
            .find(|n| n.slug == slug && n.author_id == *author_id)
            .cloned())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Note>, DomainError> {
        let mut items: Vec<Note> = self
            .notes
            .read()
            .unwrap()
            .values()
            .filter(|n| n.author_id == *author_id)
            .cloned()
            .collect();
        items.sort_by_key(|n| n.created_at);
        Ok(items)
    }

    async fn create(&self, note: &NewNote) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().unwrap();
        // Mirrors the UNIQUE constraint on the slug column
        if notes.values().any(|n| n.slug == note.slug) {
            return Err(DomainError::AlreadyExists(format!("slug '{}'", note.slug)));
        }

        let note = Note {
            id: NoteId(Uuid::new_v4()),
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
            author_id: note.author_id,
            created_at: Utc::now(),
        };
        notes.insert(note.id, note.clone());

        Ok(note)
    }

    async fn update(&self, note: &Note) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().unwrap();
        if notes
            .values()
            .any(|n| n.slug == note.slug && n.id != note.id)
        {
            return Err(DomainError::AlreadyExists(format!("slug '{}'", note.slug)));
        }

        let entry = notes
            .get_mut(&note.id)
            .ok_or_else(|| DomainError::NotFound(format!("Note {} not found", note.id)))?;
        *entry = note.clone();

        Ok(note.clone())
    }

    async fn delete(&self, id: &NoteId) -> Result<(), DomainError> {
        self.notes.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Session Store
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session, the test analogue of force-login
    pub fn add(&self, token: &str, user_id: UserId) {
        self.sessions
            .write()
            .unwrap()
            .insert(token.to_string(), user_id);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &NewSession) -> Result<(), DomainError> {
        self.add(&session.token, session.user_id);
        Ok(())
    }

    async fn find_user_id(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self.sessions.read().unwrap().get(token).copied())
    }

    async fn delete(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.write().unwrap().remove(token);
        Ok(())
    }
}
