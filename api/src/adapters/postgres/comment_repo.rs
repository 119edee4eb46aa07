//! PostgreSQL adapter for CommentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Comment, CommentId, NewComment, NewsId, UserId};
use crate::domain::ports::CommentRepository;
use crate::entity::comments;
use crate::error::DomainError;

/// PostgreSQL implementation of CommentRepository
pub struct PostgresCommentRepository {
    db: DatabaseConnection,
}

impl PostgresCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_id_and_author(
        &self,
        id: &CommentId,
        author_id: &UserId,
    ) -> Result<Option<Comment>, DomainError> {
        // Owner scoping happens in the query itself, so a foreign comment
        // is indistinguishable from a missing one.
        let result = comments::Entity::find_by_id(id.0)
            .filter(comments::Column::AuthorId.eq(author_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_for_news(&self, news_id: &NewsId) -> Result<Vec<Comment>, DomainError> {
        let results = comments::Entity::find()
            .filter(comments::Column::NewsId.eq(news_id.0))
            .order_by_asc(comments::Column::Created)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let model = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            news_id: Set(comment.news_id.0),
            author_id: Set(comment.author_id.0),
            text: Set(comment.text.clone()),
            created: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_text(&self, id: &CommentId, text: &str) -> Result<Comment, DomainError> {
        let result = comments::ActiveModel {
            id: Set(id.0),
            text: Set(text.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), DomainError> {
        let comment = comments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Comment {} not found", id)))?;

        comment
            .delete(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Comment {
            id: CommentId(model.id),
            news_id: NewsId(model.news_id),
            author_id: UserId(model.author_id),
            text: model.text,
            created: model.created.with_timezone(&Utc),
        }
    }
}
