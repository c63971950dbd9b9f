use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Synchronous string key-value storage, the local equivalent of a browser
/// profile's storage area.
///
/// Reads never fail: an unreadable entry is simply absent. Writes report I/O
/// errors, which callers log and move past.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Vec<String>;
    /// Drop every key.
    fn clear(&self) -> Result<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Decode a JSON value stored under `key`. Missing keys and malformed values
/// both come back as `None`.
pub fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = store.read(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation = "store_decode", key, error = %e, "Ignoring malformed stored value");
            None
        }
    }
}

pub fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value)
        .map_err(|e| anyhow!("Failed to encode value for {}: {}", key, e))?;
    store.write(key, &encoded)
}

fn read_lock(map: &RwLock<BTreeMap<String, String>>) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
    map.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock(map: &RwLock<BTreeMap<String, String>>) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
    map.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        read_lock(&self.entries).get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        write_lock(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        write_lock(&self.entries).remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        read_lock(&self.entries).keys().cloned().collect()
    }

    fn clear(&self) -> Result<()> {
        write_lock(&self.entries).clear();
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct StoreData {
    #[serde(flatten)]
    data: BTreeMap<String, String>,
}

/// Store persisted as one TOML table of strings. The file is read once at
/// open and rewritten in full on every change.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = Self::load_entries(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            debug!("Store file {:?} does not exist, starting empty", path);
            return Ok(BTreeMap::new());
        }

        // Read raw bytes so a file that isn't UTF-8 counts as corrupt rather
        // than an I/O failure
        let bytes = std::fs::read(path)?;
        let parsed = String::from_utf8(bytes)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<StoreData>(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(parsed) => {
                info!("Loaded store {:?} ({} keys)", path, parsed.data.len());
                Ok(parsed.data)
            }
            Err(reason) => {
                Self::backup_corrupt(path, &reason);
                Ok(BTreeMap::new())
            }
        }
    }

    /// Keep the unreadable file next to the original (`profile.toml.bak`) so
    /// nothing is lost, then let the caller start fresh.
    fn backup_corrupt(path: &Path, reason: &str) {
        let backup_path = path.with_extension("toml.bak");
        if let Err(backup_err) = std::fs::copy(path, &backup_path) {
            warn!(
                "Store file {:?} is corrupt ({}) and could not be backed up: {}. Starting empty.",
                path, reason, backup_err
            );
        } else {
            warn!(
                "Store file {:?} is corrupt ({}). Backed up to {:?} and starting empty.",
                path, reason, backup_path
            );
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store_data = StoreData { data: entries.clone() };
        let content = toml::to_string_pretty(&store_data)
            .map_err(|e| anyhow!("Failed to serialize store: {}", e))?;

        // Atomic write: temp file, then rename over the original
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Store saved: {:?} ({} keys)", self.path, entries.len());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        read_lock(&self.entries).get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = write_lock(&self.entries);
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = write_lock(&self.entries);
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        read_lock(&self.entries).keys().cloned().collect()
    }

    /// Drops every key and deletes the backing file; the next write
    /// recreates it.
    fn clear(&self) -> Result<()> {
        write_lock(&self.entries).clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            info!("Removed store file {:?}", self.path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_read_write_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.read("likedMovies"), None);

        store.write("likedMovies", "[1,2]").unwrap();
        assert_eq!(store.read("likedMovies"), Some("[1,2]".to_string()));

        store.remove("likedMovies").unwrap();
        assert_eq!(store.read("likedMovies"), None);
        assert!(store.keys().is_empty());

        store.write("likedMovies", "[1]").unwrap();
        store.clear().unwrap();
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");

        let store = FileStore::open(&path).unwrap();
        store.write("likedMovies", "[4,1]").unwrap();
        store.write("movie-comments-7", r#"[{"id":1,"content":"a \"quote\""}]"#).unwrap();
        store.write("userName", "Ada").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.read("likedMovies"), Some("[4,1]".to_string()));
        assert_eq!(
            reopened.read("movie-comments-7"),
            Some(r#"[{"id":1,"content":"a \"quote\""}]"#.to_string())
        );
        assert_eq!(reopened.read("userName"), Some("Ada".to_string()));
    }

    #[test]
    fn test_file_store_remove_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");

        let store = FileStore::open(&path).unwrap();
        store.write("watchLaterMovies", "[3]").unwrap();
        store.remove("watchLaterMovies").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.read("watchLaterMovies"), None);
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "this is = = not toml [").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().is_empty());
        assert!(path.with_extension("toml.bak").exists());
    }

    #[test]
    fn test_file_store_non_utf8_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().is_empty());
        let backup = path.with_extension("toml.bak");
        assert_eq!(std::fs::read(&backup).unwrap(), vec![0xff, 0xfe, 0x00, 0x41]);

        // The store stays usable and overwrites the bad file
        store.write("userName", "Ada").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.read("userName"), Some("Ada".to_string()));
    }

    #[test]
    fn test_file_store_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.toml");

        let store = FileStore::open(&path).unwrap();
        store.write("userName", "Ada").unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert_eq!(store.read("userName"), None);
    }

    #[test]
    fn test_read_json_malformed_is_none() {
        let store = MemoryStore::new();
        store.write("likedMovies", "{not json").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "likedMovies"), None);

        store.write("likedMovies", "[1,2,3]").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "likedMovies"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_write_json_encodes_compactly() {
        let store = MemoryStore::new();
        write_json(&store, "dislikedMovies", &[5u32, 9]).unwrap();
        assert_eq!(store.read("dislikedMovies"), Some("[5,9]".to_string()));
    }
}
