use rstest::*;

use crate::store::{MemoryStore, SqliteStore};

/// Test fixture that creates an in-memory SQLite store with migrations applied
///
/// This fixture can be imported and used across all tests that need the real
/// SQL-backed store.
#[fixture]
pub async fn test_store() -> SqliteStore {
    SqliteStore::in_memory()
        .await
        .expect("Failed to create in-memory store")
}

/// Empty map-backed store, for tests that don't care about SQL
#[fixture]
pub fn memory_store() -> MemoryStore {
    MemoryStore::default()
}
