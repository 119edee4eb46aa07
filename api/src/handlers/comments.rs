//! Comment handlers
//!
//! All routes here sit behind the login gate. Successful mutations bounce
//! back to the news detail page with the `#comments` fragment; a rejected
//! text re-renders the form with the warning on the `text` field.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{CommentId, NewsId, User};
use crate::error::AppError;
use crate::forms::{CommentForm, FormErrors};
use crate::handlers::news::CommentItem;
use crate::AppState;

/// Edit page body
#[derive(Debug, Serialize)]
pub struct CommentEditPage {
    pub comment: CommentItem,
    pub form: FormErrors,
}

/// Delete confirmation page body
#[derive(Debug, Serialize)]
pub struct CommentDeletePage {
    pub comment: CommentItem,
}

fn comments_fragment(news_id: &NewsId) -> Redirect {
    Redirect::to(&format!("/news/{}#comments", news_id))
}

/// POST /news/:id/comments
///
/// Submit a comment on a news item.
pub async fn post_comment(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(news_id): Path<Uuid>,
    Json(form): Json<CommentForm>,
) -> Result<Redirect, AppError> {
    let news_id = NewsId(news_id);
    state
        .comment_service
        .create(&news_id, &user.id, &form.text)
        .await?;

    Ok(comments_fragment(&news_id))
}

/// GET /comments/:id/edit
///
/// Edit page; resolves only for the comment's author.
pub async fn edit_comment_page(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentEditPage>, AppError> {
    let comment = state
        .comment_service
        .get_owned(&CommentId(id), &user.id)
        .await?;

    Ok(Json(CommentEditPage {
        comment: comment.into(),
        form: FormErrors::new(),
    }))
}

/// POST /comments/:id/edit
///
/// Replace the comment's text, author only.
pub async fn update_comment(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(form): Json<CommentForm>,
) -> Result<Redirect, AppError> {
    let updated = state
        .comment_service
        .update(&CommentId(id), &user.id, &form.text)
        .await?;

    Ok(comments_fragment(&updated.news_id))
}

/// GET /comments/:id/delete
///
/// Delete confirmation page; resolves only for the comment's author.
pub async fn delete_comment_page(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentDeletePage>, AppError> {
    let comment = state
        .comment_service
        .get_owned(&CommentId(id), &user.id)
        .await?;

    Ok(Json(CommentDeletePage {
        comment: comment.into(),
    }))
}

/// POST|DELETE /comments/:id/delete
///
/// Remove the comment, author only.
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    let deleted = state
        .comment_service
        .delete(&CommentId(id), &user.id)
        .await?;

    Ok(comments_fragment(&deleted.news_id))
}
