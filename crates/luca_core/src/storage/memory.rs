//! In-memory key-value storage for tests and ephemeral sessions.

use super::{KvStorage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// HashMap-backed storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKvStorage {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryKvStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records; test helper.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl KvStorage for MemoryKvStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStorage;
    use crate::storage::KvStorage;

    #[test]
    fn behaves_like_a_map() {
        let storage = MemoryKvStorage::new();
        assert!(storage.is_empty());
        storage.write("k", "v1").unwrap();
        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);
        storage.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);
    }
}
