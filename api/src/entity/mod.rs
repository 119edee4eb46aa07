//! SeaORM table models
//!
//! Database-facing models; the `adapters::postgres` repositories convert
//! these into the domain entities.

pub mod comments;
pub mod news;
pub mod notes;
pub mod sessions;
pub mod users;
