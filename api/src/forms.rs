//! Form payloads and field-level errors
//!
//! Submission bodies for every form in both apps, plus the `FormErrors`
//! container that a rejected submission re-renders with. An empty
//! `FormErrors` doubles as the "unbound form" object included on pages
//! that carry a form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message attached to a required field left empty
pub const REQUIRED: &str = "This field is required.";

/// Comment submission on a news detail page
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

/// Note create/edit submission
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl NoteForm {
    /// The slug field with empty submissions treated as omitted
    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Login submission
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup submission
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

/// Field-level validation errors, keyed by field name
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`add`](Self::add)
    pub fn field(mut self, name: &str, message: impl Into<String>) -> Self {
        self.add(name, message);
        self
    }

    /// Attach an error message to a field
    pub fn add(&mut self, name: &str, message: impl Into<String>) {
        self.errors
            .entry(name.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages attached to a field, if any
    pub fn get(&self, name: &str) -> Option<&Vec<String>> {
        self.errors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_errors_serialize_as_empty_map() {
        let json = serde_json::to_value(FormErrors::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": {} }));
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = FormErrors::new();
        errors.add("text", "first");
        errors.add("text", "second");

        assert_eq!(errors.get("text").unwrap().len(), 2);
        assert!(errors.get("title").is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn blank_slug_counts_as_omitted() {
        let form = NoteForm {
            title: "Title".to_string(),
            text: "Text".to_string(),
            slug: Some("   ".to_string()),
        };
        assert_eq!(form.explicit_slug(), None);

        let form = NoteForm {
            title: "Title".to_string(),
            text: "Text".to_string(),
            slug: Some("my-slug".to_string()),
        };
        assert_eq!(form.explicit_slug(), Some("my-slug"));
    }
}
