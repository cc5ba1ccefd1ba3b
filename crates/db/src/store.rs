use crate::error::{Error, Result};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Minimal string key-value storage that the score history persists into.
pub trait Store {
    /// Returns `None` if nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Keeps everything in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<Box<str>, Box<str>>);

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).map(|value| value.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.insert(key.into(), value.into());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.0.remove(key);
        Ok(())
    }
}

/// Stores each key as `<key>.json` inside a directory. The directory is created on first write.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, key: &str) -> Result<PathBuf> {
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
        if key.is_empty() || !key.chars().all(allowed) {
            return Err(Error::InvalidKey);
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_of(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                log::error!("cannot read {}: {err}", path.display());
                Err(err.into())
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_of(key)?;
        fs::create_dir_all(&self.root)?;

        // Readers must never observe a half-written file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .and_then(|_| fs::rename(&staging, &path))
            .map_err(|err| {
                log::error!("cannot write {}: {err}", path.display());
                // Best effort: the staging file may not even exist.
                let _ = fs::remove_file(&staging);
                Error::from(err)
            })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_of(key)?;
        match fs::remove_file(&path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                log::error!("cannot remove {}: {err}", path.display());
                Err(err.into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("key").unwrap(), None);

        store.set("key", "hello").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("hello"));

        store.set("key", "world").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("world"));

        store.remove("key").unwrap();
        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("quiz_score_history").unwrap(), None);

        store.set("quiz_score_history", "[]").unwrap();
        assert_eq!(store.get("quiz_score_history").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/quiz_score_history.json").is_file());
        assert!(!dir.path().join("nested/quiz_score_history.json.tmp").exists());

        store.remove("quiz_score_history").unwrap();
        store.remove("quiz_score_history").unwrap();
        assert_eq!(store.get("quiz_score_history").unwrap(), None);
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", "dotted.key"] {
            assert!(matches!(store.get(key), Err(Error::InvalidKey)), "{key}");
            assert!(matches!(store.set(key, "x"), Err(Error::InvalidKey)), "{key}");
            assert!(matches!(store.remove(key), Err(Error::InvalidKey)), "{key}");
        }
    }

    #[test]
    fn file_store_cleans_up_after_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the target file makes the final rename fail.
        fs::create_dir_all(dir.path().join("history.json/occupied")).unwrap();

        let mut store = FileStore::new(dir.path());
        assert!(matches!(store.set("history", "[]"), Err(Error::Io(_))));
        assert!(!dir.path().join("history.json.tmp").exists());
    }
}
