//! Comment service
//!
//! Creation, editing and deletion of comments. Every text passes the
//! moderation filter before anything touches the store, and every mutation
//! resolves the target through an author-scoped lookup, so a foreign
//! comment behaves exactly like a missing one.

use std::sync::Arc;

use crate::domain::entities::{Comment, CommentId, NewComment, NewsId, UserId};
use crate::domain::moderation;
use crate::domain::ports::{CommentRepository, NewsRepository};
use crate::error::AppError;
use crate::forms::{FormErrors, REQUIRED};

/// Service for comment lifecycle
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    news: Arc<dyn NewsRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { comments, news }
    }

    /// Create a comment under a news item
    pub async fn create(
        &self,
        news_id: &NewsId,
        author_id: &UserId,
        text: &str,
    ) -> Result<Comment, AppError> {
        validate_text(text)?;

        self.news
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("news {}", news_id)))?;

        let comment = self
            .comments
            .create(&NewComment {
                news_id: *news_id,
                author_id: *author_id,
                text: text.to_string(),
            })
            .await?;

        Ok(comment)
    }

    /// Resolve a comment for its author; anyone else gets not-found
    pub async fn get_owned(
        &self,
        id: &CommentId,
        author_id: &UserId,
    ) -> Result<Comment, AppError> {
        self.comments
            .find_by_id_and_author(id, author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// Replace a comment's text, author only
    pub async fn update(
        &self,
        id: &CommentId,
        author_id: &UserId,
        text: &str,
    ) -> Result<Comment, AppError> {
        validate_text(text)?;

        self.get_owned(id, author_id).await?;
        let updated = self.comments.update_text(id, text).await?;

        Ok(updated)
    }

    /// Delete a comment, author only; returns the deleted comment so the
    /// caller can redirect back to its news item
    pub async fn delete(&self, id: &CommentId, author_id: &UserId) -> Result<Comment, AppError> {
        let comment = self.get_owned(id, author_id).await?;
        self.comments.delete(id).await?;

        Ok(comment)
    }
}

/// Required + moderation checks; the warning lands on the `text` field
fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Form(FormErrors::new().field("text", REQUIRED)));
    }
    if !moderation::is_clean(text) {
        return Err(AppError::Form(
            FormErrors::new().field("text", moderation::WARNING),
        ));
    }
    Ok(())
}
