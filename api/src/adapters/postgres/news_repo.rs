//! PostgreSQL adapter for NewsRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::domain::entities::{News, NewsId};
use crate::domain::ports::NewsRepository;
use crate::entity::news;
use crate::error::DomainError;

/// PostgreSQL implementation of NewsRepository
pub struct PostgresNewsRepository {
    db: DatabaseConnection,
}

impl PostgresNewsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn find_by_id(&self, id: &NewsId) -> Result<Option<News>, DomainError> {
        let result = news::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<News>, DomainError> {
        let results = news::Entity::find()
            .order_by_desc(news::Column::Date)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<news::Model> for News {
    fn from(model: news::Model) -> Self {
        News {
            id: NewsId(model.id),
            title: model.title,
            text: model.text,
            date: model.date,
        }
    }
}
