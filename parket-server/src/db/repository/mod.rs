//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. Each repository owns one
//! table; cross-table rules (cascade deletes, reference checks) live in
//! the repository of the table that owns the rule.

// Client Domain
pub mod client;
pub mod project;

// Project Structure
pub mod phase;
pub mod room;
pub mod room_product;
pub mod variant;

// Catalog
pub mod product;

// Documents
pub mod invoice;
pub mod offer;
pub mod order;

// Re-exports
pub use client::ClientRepository;
pub use invoice::InvoiceRepository;
pub use offer::OfferRepository;
pub use order::OrderRepository;
pub use phase::PhaseRepository;
pub use product::ProductRepository;
pub use project::ProjectRepository;
pub use room::RoomRepository;
pub use room_product::RoomProductRepository;
pub use variant::VariantRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// IDs cross the API as "table:id" strings. Repositories accept either
// that form or the bare key; these two helpers normalize between them.

/// Strip a matching "table:" prefix, leaving the bare record key
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((tb, rest)) if tb == table => rest,
        _ => id,
    }
}

/// Build a Thing from a table name and a bare record key
pub fn make_thing(table: &str, id: &str) -> Thing {
    Thing::from((table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_matching_prefix() {
        assert_eq!(strip_table_prefix("client", "client:abc"), "abc");
    }

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(strip_table_prefix("client", "abc"), "abc");
    }

    #[test]
    fn test_foreign_prefix_left_alone() {
        assert_eq!(strip_table_prefix("client", "project:abc"), "project:abc");
    }

    #[test]
    fn test_make_thing_round_trip() {
        let thing = make_thing("room", "r1");
        assert_eq!(thing.to_string(), "room:r1");
        assert_eq!(strip_table_prefix("room", &thing.to_string()), "r1");
    }
}
