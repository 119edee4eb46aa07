//! Note handlers
//!
//! All routes here sit behind the login gate, and every lookup is scoped
//! to the requesting user: a note that exists but belongs to someone else
//! is a 404. Successful mutations redirect to the done page.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension, Json,
};
use serde::Serialize;

use crate::domain::entities::{Note, User};
use crate::error::AppError;
use crate::forms::{FormErrors, NoteForm};
use crate::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Note as rendered on list and detail pages
#[derive(Debug, Serialize)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub text: String,
    pub slug: String,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        NoteItem {
            id: note.id.to_string(),
            title: note.title,
            text: note.text,
            slug: note.slug,
        }
    }
}

/// List page body
#[derive(Debug, Serialize)]
pub struct NoteListPage {
    pub notes: Vec<NoteItem>,
}

/// Add page body: just an unbound form
#[derive(Debug, Serialize)]
pub struct NoteAddPage {
    pub form: FormErrors,
}

/// Detail page body
#[derive(Debug, Serialize)]
pub struct NoteDetailPage {
    pub note: NoteItem,
}

/// Edit page body
#[derive(Debug, Serialize)]
pub struct NoteEditPage {
    pub note: NoteItem,
    pub form: FormErrors,
}

/// Done page body
#[derive(Debug, Serialize)]
pub struct NoteDonePage {
    pub detail: &'static str,
}

fn done_redirect() -> Redirect {
    Redirect::to("/notes/success")
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /notes
///
/// The requesting user's notes, nobody else's.
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<NoteListPage>, AppError> {
    let notes = state.note_service.list_for(&user.id).await?;

    Ok(Json(NoteListPage {
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

/// GET /notes/add
pub async fn add_note_page(Extension(_user): Extension<User>) -> Json<NoteAddPage> {
    Json(NoteAddPage {
        form: FormErrors::new(),
    })
}

/// POST /notes/add
///
/// Create a note; the slug is validated or derived by the service.
pub async fn create_note(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(form): Json<NoteForm>,
) -> Result<Redirect, AppError> {
    state.note_service.create(&user.id, &form).await?;

    Ok(done_redirect())
}

/// GET /notes/success
pub async fn note_done(Extension(_user): Extension<User>) -> Json<NoteDonePage> {
    Json(NoteDonePage {
        detail: "Done.",
    })
}

/// GET /notes/:slug
pub async fn note_detail(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(slug): Path<String>,
) -> Result<Json<NoteDetailPage>, AppError> {
    let note = state.note_service.get_owned(&slug, &user.id).await?;

    Ok(Json(NoteDetailPage { note: note.into() }))
}

/// GET /notes/:slug/edit
pub async fn edit_note_page(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(slug): Path<String>,
) -> Result<Json<NoteEditPage>, AppError> {
    let note = state.note_service.get_owned(&slug, &user.id).await?;

    Ok(Json(NoteEditPage {
        note: note.into(),
        form: FormErrors::new(),
    }))
}

/// POST /notes/:slug/edit
pub async fn update_note(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(slug): Path<String>,
    Json(form): Json<NoteForm>,
) -> Result<Redirect, AppError> {
    state.note_service.update(&slug, &user.id, &form).await?;

    Ok(done_redirect())
}

/// GET /notes/:slug/delete
pub async fn delete_note_page(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(slug): Path<String>,
) -> Result<Json<NoteDetailPage>, AppError> {
    let note = state.note_service.get_owned(&slug, &user.id).await?;

    Ok(Json(NoteDetailPage { note: note.into() }))
}

/// POST|DELETE /notes/:slug/delete
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(slug): Path<String>,
) -> Result<Redirect, AppError> {
    state.note_service.delete(&slug, &user.id).await?;

    Ok(done_redirect())
}
