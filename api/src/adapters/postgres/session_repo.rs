//! PostgreSQL adapter for SessionStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{NewSession, UserId};
use crate::domain::ports::SessionStore;
use crate::entity::sessions;
use crate::error::DomainError;

/// PostgreSQL implementation of SessionStore
pub struct PostgresSessionStore {
    db: DatabaseConnection,
}

impl PostgresSessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn insert(&self, session: &NewSession) -> Result<(), DomainError> {
        sessions::ActiveModel {
            token: Set(session.token.clone()),
            user_id: Set(session.user_id.0),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_user_id(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let result = sessions::Entity::find_by_id(token)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| UserId(m.user_id)))
    }

    async fn delete(&self, token: &str) -> Result<(), DomainError> {
        sessions::Entity::delete_by_id(token)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
