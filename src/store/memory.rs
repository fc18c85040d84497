use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::Result;

/// Map-backed store that lives for the duration of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::memory_store;
    use rstest::*;

    #[rstest]
    #[tokio::test]
    async fn test_get_missing_key(memory_store: MemoryStore) {
        let value = memory_store.get("nothing").await.expect("Failed to get");

        assert_eq!(value, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_set_overwrites(memory_store: MemoryStore) {
        memory_store.set("k", "one").await.expect("Failed to set");
        memory_store.set("k", "two").await.expect("Failed to set");

        let value = memory_store.get("k").await.expect("Failed to get");

        assert_eq!(value, Some("two".to_string()));
    }
}
