//! Persistence: the key-value capability the store consumes, plus
//! application configuration.

mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::StorageError;

/// The string key-value capability the task store persists through.
///
/// One `get` per logical record at startup, one `set` per affected
/// record after each mutation. Implementations decide durability; the
/// store treats every failure as non-fatal.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory key-value store for tests and ephemeral sessions. Cloning
/// shares the underlying map, so a test can reload a store from the
/// same entries it wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns `~/.config/capable[-dev]/` based on CAPABLE_ENV, creating it
/// if needed.
///
/// Set CAPABLE_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CAPABLE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("capable-dev")
    } else {
        base_dir.join("capable")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut kv = MemoryStore::default();
        assert_eq!(kv.get("missing").unwrap(), None);
        kv.set("k", "v1").unwrap();
        kv.set("k", "v2").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let mut kv = MemoryStore::default();
        let handle = kv.clone();
        kv.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }
}
