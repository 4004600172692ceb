// src/store/memory.rs
use std::collections::HashMap;
use std::sync::RwLock;

use mime::Mime;

use crate::store::{ObjectStore, StoreError};

/// In-memory object store for tests: objects live in a map keyed by
/// (container, key), and the declared content type is recorded so
/// assertions can see it.
#[derive(Default)]
pub struct MemStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object directly, without going through the trait.
    pub fn insert(&self, container: &str, key: &str, body: impl Into<Vec<u8>>) {
        self.objects.write().unwrap().insert(
            (container.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: String::new(),
            },
        );
    }

    /// Snapshot of one stored object, if present.
    pub fn object(&self, container: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .unwrap()
            .get(&(container.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

impl ObjectStore for MemStore {
    fn get_object(&self, container: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        self.object(container, key)
            .map(|object| object.body)
            .ok_or_else(|| StoreError::NotFound {
                container: container.to_string(),
                key: key.to_string(),
            })
    }

    fn put_object(
        &self,
        container: &str,
        key: &str,
        body: &[u8],
        content_type: &Mime,
    ) -> Result<(), StoreError> {
        self.objects.write().unwrap().insert(
            (container.to_string(), key.to_string()),
            StoredObject {
                body: body.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_body_and_content_type() {
        let store = MemStore::new();
        store.put_object("out", "x.csv", b"a,b", &mime::TEXT_CSV).unwrap();

        let object = store.object("out", "x.csv").unwrap();
        assert_eq!(object.body, b"a,b");
        assert_eq!(object.content_type, "text/csv");
    }

    #[test]
    fn missing_object_is_not_found() {
        let store = MemStore::new();
        assert!(matches!(
            store.get_object("out", "absent").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn containers_do_not_collide() {
        let store = MemStore::new();
        store.insert("a", "k", "one");
        store.insert("b", "k", "two");

        assert_eq!(store.get_object("a", "k").unwrap(), b"one");
        assert_eq!(store.get_object("b", "k").unwrap(), b"two");
        assert_eq!(store.len(), 2);
    }
}
