//! Note service
//!
//! The owner-scoped note lifecycle plus slug assignment. An explicit slug
//! must be globally free; an omitted slug is derived from the title, with
//! the configured policy deciding what happens when the derived value is
//! already taken. The store-level UNIQUE constraint backs all of it, so a
//! pre-check that loses a race still ends in the same field error.

use std::sync::Arc;

use crate::domain::entities::{NewNote, Note, UserId};
use crate::domain::ports::NoteRepository;
use crate::domain::slug::{slugify, SlugCollisionPolicy, SLUG_EXISTS_WARNING};
use crate::error::{AppError, DomainError};
use crate::forms::{FormErrors, NoteForm, REQUIRED};

/// Attached to the slug field when nothing usable can be derived from the title
pub const EMPTY_SLUG_WARNING: &str =
    "Could not derive a slug from the title, provide one explicitly.";

/// Service for note lifecycle
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
    collision_policy: SlugCollisionPolicy,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteRepository>, collision_policy: SlugCollisionPolicy) -> Self {
        Self {
            notes,
            collision_policy,
        }
    }

    /// All notes owned by a user; never anyone else's
    pub async fn list_for(&self, owner_id: &UserId) -> Result<Vec<Note>, AppError> {
        Ok(self.notes.list_by_author(owner_id).await?)
    }

    /// Resolve a note for its owner; anyone else gets not-found
    pub async fn get_owned(&self, slug: &str, owner_id: &UserId) -> Result<Note, AppError> {
        self.notes
            .find_by_slug_and_author(slug, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("note '{}'", slug)))
    }

    /// Create a note for its owner
    pub async fn create(&self, owner_id: &UserId, form: &NoteForm) -> Result<Note, AppError> {
        validate_required(form)?;
        let slug = self.assign_slug(form, None).await?;

        let created = self
            .notes
            .create(&NewNote {
                title: form.title.clone(),
                text: form.text.clone(),
                slug: slug.clone(),
                author_id: *owner_id,
            })
            .await
            .map_err(|e| slug_conflict_to_form(e, &slug))?;

        Ok(created)
    }

    /// Update a note, owner only; the slug is re-derived when omitted
    pub async fn update(
        &self,
        slug: &str,
        owner_id: &UserId,
        form: &NoteForm,
    ) -> Result<Note, AppError> {
        let mut note = self.get_owned(slug, owner_id).await?;

        validate_required(form)?;
        let new_slug = self.assign_slug(form, Some(&note)).await?;

        note.title = form.title.clone();
        note.text = form.text.clone();
        note.slug = new_slug.clone();

        let updated = self
            .notes
            .update(&note)
            .await
            .map_err(|e| slug_conflict_to_form(e, &new_slug))?;

        Ok(updated)
    }

    /// Delete a note, owner only
    pub async fn delete(&self, slug: &str, owner_id: &UserId) -> Result<(), AppError> {
        let note = self.get_owned(slug, owner_id).await?;
        self.notes.delete(&note.id).await?;

        Ok(())
    }

    /// Pick the slug for a submission.
    ///
    /// `current` is the note being edited, if any; its own slug never
    /// counts as a collision.
    async fn assign_slug(
        &self,
        form: &NoteForm,
        current: Option<&Note>,
    ) -> Result<String, AppError> {
        if let Some(explicit) = form.explicit_slug() {
            if self.is_taken(explicit, current).await? {
                return Err(slug_taken_error(explicit));
            }
            return Ok(explicit.to_string());
        }

        let derived = slugify(&form.title);
        if derived.is_empty() {
            return Err(AppError::Form(
                FormErrors::new().field("slug", EMPTY_SLUG_WARNING),
            ));
        }

        if !self.is_taken(&derived, current).await? {
            return Ok(derived);
        }

        match self.collision_policy {
            SlugCollisionPolicy::Reject => Err(slug_taken_error(&derived)),
            SlugCollisionPolicy::Suffix => {
                let mut n = 2u32;
                loop {
                    let candidate = format!("{}-{}", derived, n);
                    if !self.is_taken(&candidate, current).await? {
                        return Ok(candidate);
                    }
                    n += 1;
                }
            }
        }
    }

    async fn is_taken(&self, slug: &str, current: Option<&Note>) -> Result<bool, AppError> {
        let existing = self.notes.find_by_slug(slug).await?;
        Ok(match existing {
            Some(found) => current.map(|c| c.id) != Some(found.id),
            None => false,
        })
    }
}

fn validate_required(form: &NoteForm) -> Result<(), AppError> {
    let mut errors = FormErrors::new();
    if form.title.trim().is_empty() {
        errors.add("title", REQUIRED);
    }
    if form.text.trim().is_empty() {
        errors.add("text", REQUIRED);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Form(errors))
    }
}

fn slug_taken_error(slug: &str) -> AppError {
    AppError::Form(FormErrors::new().field("slug", format!("{}{}", slug, SLUG_EXISTS_WARNING)))
}

/// A unique-constraint violation that slipped past the pre-check (a
/// concurrent insert) surfaces as the same field error
fn slug_conflict_to_form(e: DomainError, slug: &str) -> AppError {
    match e {
        DomainError::AlreadyExists(_) => slug_taken_error(slug),
        other => AppError::Domain(other),
    }
}
