//! PostgreSQL adapter for NoteRepository
//!
//! Slug uniqueness is guaranteed by the UNIQUE constraint on `notes.slug`;
//! a violation during insert or update is reported as `AlreadyExists` so
//! the service can turn it into the field-level form error. This keeps the
//! guarantee atomic even when the application-level pre-check loses a race.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{NewNote, Note, NoteId, UserId};
use crate::domain::ports::NoteRepository;
use crate::entity::notes;
use crate::error::DomainError;

/// PostgreSQL implementation of NoteRepository
pub struct PostgresNoteRepository {
    db: DatabaseConnection,
}

impl PostgresNoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_err(e: DbErr, slug: &str) -> DomainError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        DomainError::AlreadyExists(format!("slug '{}'", slug))
    } else {
        DomainError::Database(e.to_string())
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Note>, DomainError> {
        let result = notes::Entity::find()
            .filter(notes::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_slug_and_author(
        &self,
        slug: &str,
        author_id: &UserId,
    ) -> Result<Option<Note>, DomainError> {
        // Owner scoping happens in the query itself, so someone else's
        // note is indistinguishable from a missing one.
        let result = notes::Entity::find()
            .filter(notes::Column::Slug.eq(slug))
            .filter(notes::Column::AuthorId.eq(author_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Note>, DomainError> {
        let results = notes::Entity::find()
            .filter(notes::Column::AuthorId.eq(author_id.0))
            .order_by_asc(notes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, note: &NewNote) -> Result<Note, DomainError> {
        let model = notes::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(note.title.clone()),
            text: Set(note.text.clone()),
            slug: Set(note.slug.clone()),
            author_id: Set(note.author_id.0),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, &note.slug))?;

        Ok(result.into())
    }

    async fn update(&self, note: &Note) -> Result<Note, DomainError> {
        let result = notes::ActiveModel {
            id: Set(note.id.0),
            title: Set(note.title.clone()),
            text: Set(note.text.clone()),
            slug: Set(note.slug.clone()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| map_insert_err(e, &note.slug))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &NoteId) -> Result<(), DomainError> {
        notes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<notes::Model> for Note {
    fn from(model: notes::Model) -> Self {
        Note {
            id: NoteId(model.id),
            title: model.title,
            text: model.text,
            slug: model.slug,
            author_id: UserId(model.author_id),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
