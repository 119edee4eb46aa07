//! Schema bootstrap
//!
//! The schema is small enough to ship as embedded DDL applied at startup.
//! Every statement is idempotent. The UNIQUE constraint on `notes.slug` is
//! the authoritative uniqueness guarantee; application code only pre-checks
//! to produce a friendly error message.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::DomainError;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS news (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        text TEXT NOT NULL,
        date DATE NOT NULL DEFAULT CURRENT_DATE
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id UUID PRIMARY KEY,
        news_id UUID NOT NULL REFERENCES news(id) ON DELETE CASCADE,
        author_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        text TEXT NOT NULL,
        created TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS comments_news_created_idx
        ON comments (news_id, created)",
    "CREATE TABLE IF NOT EXISTS notes (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        text TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        author_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS notes_author_idx ON notes (author_id)",
    "CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
];

/// Apply the embedded schema, statement by statement
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    for statement in SCHEMA {
        db.execute_unprepared(statement)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }
    Ok(())
}
