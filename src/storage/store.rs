//! Key-value storage capability.
//!
//! The dashboard keeps its access token and small collections (such as the
//! job notification queue) in a string key-value store. The retrieval client
//! and the notification queue receive the store as a dependency so they can
//! run against memory in tests and against a JSON file in the CLI.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Read the access token stored under `key`. Blank tokens count as absent.
pub fn get_credential(store: &dyn KeyValueStore, key: &str) -> StoreResult<Option<String>> {
    Ok(store
        .get(key)?
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty()))
}

/// Read a JSON array stored under `key`. A missing key is an empty collection.
pub fn get_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Store `items` as a JSON array under `key`.
pub fn set_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.write().insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole file is read on every access and rewritten on every change.
/// Writes go to a sibling `.tmp` file that is then renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_credential_blank_is_absent() {
        let store = MemoryStore::new().with_entry("accessToken", "   ");
        assert_eq!(get_credential(&store, "accessToken").unwrap(), None);

        store.set("accessToken", " tok-1 ").unwrap();
        assert_eq!(get_credential(&store, "accessToken").unwrap().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_collections() {
        let store = MemoryStore::new();
        let empty: Vec<u32> = get_collection(&store, "nums").unwrap();
        assert!(empty.is_empty());

        set_collection(&store, "nums", &[3u32, 1, 2]).unwrap();
        let nums: Vec<u32> = get_collection(&store, "nums").unwrap();
        assert_eq!(nums, vec![3, 1, 2]);

        store.set("nums", "{not json").unwrap();
        let err = get_collection::<u32>(&store, "nums").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_json_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("store.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("accessToken").unwrap(), None);
        store.set("accessToken", "tok-9").unwrap();
        store.set("other", "x").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("accessToken").unwrap().as_deref(), Some("tok-9"));
        reopened.remove("other").unwrap();
        assert_eq!(store.get("other").unwrap(), None);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_json_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Serialization(_))));
    }
}
