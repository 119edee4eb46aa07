//! News page handlers
//!
//! The public read side: home feed and news detail. The detail page
//! includes a comment form object only for authenticated requests, which
//! is how clients know whether to render the submission box.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::domain::entities::{Comment, News, NewsId};
use crate::error::AppError;
use crate::forms::FormErrors;
use crate::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// News item as rendered on feed and detail pages
#[derive(Debug, Serialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub text: String,
    pub date: NaiveDate,
}

impl From<News> for NewsItem {
    fn from(news: News) -> Self {
        NewsItem {
            id: news.id.to_string(),
            title: news.title,
            text: news.text,
            date: news.date,
        }
    }
}

/// Comment as rendered on the detail page
#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub id: String,
    pub author_id: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentItem {
    fn from(comment: Comment) -> Self {
        CommentItem {
            id: comment.id.to_string(),
            author_id: comment.author_id.to_string(),
            text: comment.text,
            created: comment.created,
        }
    }
}

/// Home page body
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub news: Vec<NewsItem>,
}

/// Detail page body
#[derive(Debug, Serialize)]
pub struct NewsDetailPage {
    pub news: NewsItem,
    pub comments: Vec<CommentItem>,
    /// Present only for authenticated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormErrors>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
///
/// The most recent news, newest first, truncated to the configured page size.
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, AppError> {
    let news = state.news_service.home_page().await?;

    Ok(Json(HomePage {
        news: news.into_iter().map(Into::into).collect(),
    }))
}

/// GET /news/:id
///
/// One news item with its comments in chronological order.
pub async fn news_detail(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<NewsDetailPage>, AppError> {
    let (news, comments) = state.news_service.detail(&NewsId(id)).await?;

    Ok(Json(NewsDetailPage {
        news: news.into(),
        comments: comments.into_iter().map(Into::into).collect(),
        form: current.0.map(|_| FormErrors::new()),
    }))
}
