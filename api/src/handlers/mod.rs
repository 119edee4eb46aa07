//! HTTP handlers
//!
//! Axum request handlers for both apps plus the auth pages.

pub mod auth;
pub mod comments;
pub mod news;
pub mod notes;

pub use auth::{login, login_page, logout, signup, signup_page};
pub use comments::{
    delete_comment, delete_comment_page, edit_comment_page, post_comment, update_comment,
};
pub use news::{home, news_detail};
pub use notes::{
    add_note_page, create_note, delete_note, delete_note_page, edit_note_page, list_notes,
    note_detail, note_done, update_note,
};
