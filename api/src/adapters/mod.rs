//! Adapters - implementations of the domain ports

pub mod postgres;

pub use postgres::{
    ensure_schema, PostgresCommentRepository, PostgresNewsRepository, PostgresNoteRepository,
    PostgresSessionStore, PostgresUserRepository,
};
