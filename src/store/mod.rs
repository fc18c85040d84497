mod memory;
mod sqlite;

use std::future::Future;

use crate::error::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// String key -> JSON blob persistence
///
/// `get` returns `None` for a key that was never set.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}
