//! Test utilities
//!
//! In-memory repository implementations and fixture factories shared by
//! the unit and integration tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{
    test_comment, test_comment_at, test_news, test_news_dated, test_note, test_user,
    FIXTURE_PASSWORD,
};
pub use mocks::{
    InMemoryCommentRepository, InMemoryNewsRepository, InMemoryNoteRepository,
    InMemorySessionStore, InMemoryUserRepository,
};
