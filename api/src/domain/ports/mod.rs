//! Ports - interfaces to the outside world
//!
//! These traits are implemented by adapters.

pub mod repositories;

pub use repositories::{
    CommentRepository, NewsRepository, NoteRepository, SessionStore, UserRepository,
};
