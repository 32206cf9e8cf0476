//! String key/value persistence, the desktop stand-in for browser local storage.
//!
//! The preference store only ever talks to the [`KeyValueStore`] trait so
//! tests can inject a [`MemoryStore`] while the app and CLI share a
//! [`RedbStore`] file in the data directory.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::CardError;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// File name of the preference database inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// String-valued key/value port.
pub trait KeyValueStore: Send + Sync {
    /// Read a key. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, CardError>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CardError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CardError>;

    /// All stored pairs, sorted by key.
    fn entries(&self) -> Result<Vec<(String, String)>, CardError>;
}

/// In-memory store used by tests and as a fallback when the database
/// cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing pairs.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let items = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CardError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CardError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CardError> {
        self.items.write().remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, CardError> {
        let mut pairs: Vec<_> = self
            .items
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort();
        Ok(pairs)
    }
}

/// redb-backed store for ACID persistence across restarts.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates the parent directory and the table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preference store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open `preferences.redb` inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self, CardError> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, CardError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CardError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CardError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, CardError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        let mut pairs = Vec::new();
        for item in table.iter()? {
            let (k, v) = item?;
            pairs.push((k.value().to_string(), v.value().to_string()));
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("language").unwrap(), None);

        store.set("language", "en").unwrap();
        assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));

        store.remove("language").unwrap();
        assert_eq!(store.get("language").unwrap(), None);
    }

    #[test]
    fn test_memory_store_entries_sorted() {
        let store = MemoryStore::with_entries([("b", "2"), ("a", "1")]);
        let entries = store.entries().unwrap();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_redb_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set("activeMode", "dark").unwrap();
            store.set("borderRadius", "12").unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("activeMode").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("borderRadius").unwrap().as_deref(), Some("12"));
        assert_eq!(store.entries().unwrap().len(), 2);
    }

    #[test]
    fn test_redb_store_remove_missing_is_ok() {
        let dir = tempdir().unwrap();
        let store = RedbStore::open_in(dir.path()).unwrap();
        store.remove("nothing-here").unwrap();
        assert!(dir.path().join(PREFERENCES_FILE).exists());
    }
}
