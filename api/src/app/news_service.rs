//! News service
//!
//! Read side of the news app: the home page feed and the detail page with
//! its comment thread.

use std::sync::Arc;

use crate::domain::entities::{Comment, News, NewsId};
use crate::domain::ports::{CommentRepository, NewsRepository};
use crate::error::AppError;

/// Service for the public news pages
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    comments: Arc<dyn CommentRepository>,
    page_size: u64,
}

impl NewsService {
    pub fn new(
        news: Arc<dyn NewsRepository>,
        comments: Arc<dyn CommentRepository>,
        page_size: u64,
    ) -> Self {
        Self {
            news,
            comments,
            page_size,
        }
    }

    /// Home page feed: at most `page_size` items, newest date first
    pub async fn home_page(&self) -> Result<Vec<News>, AppError> {
        Ok(self.news.list_recent(self.page_size).await?)
    }

    /// Detail page: the news item and its comments in chronological order
    pub async fn detail(&self, id: &NewsId) -> Result<(News, Vec<Comment>), AppError> {
        let news = self
            .news
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("news {}", id)))?;

        let comments = self.comments.list_for_news(id).await?;

        Ok((news, comments))
    }
}
