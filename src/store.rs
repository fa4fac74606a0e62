//! Key-value persistence for encounter state. The engine writes a full
//! snapshot after every mutation; a failed write never fails the operation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SHIPS_KEY: &str = "ships";
pub const TURN_KEY: &str = "turn";

pub const DEFAULT_DATA_DIR: &str = "data/state";

/// Durable string store. Reads return None for missing or unreadable keys;
/// writes swallow errors (the in-memory state stays authoritative).
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
}

/// One file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory from BROADSWORD_DATA_DIR, else the default.
    pub fn from_env() -> Self {
        let dir = std::env::var("BROADSWORD_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(err) = write_file(&self.dir, &self.path_for(key), value) {
            eprintln!("store: failed to persist '{key}': {err}");
        }
    }
}

fn write_file(dir: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(path, value)
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, for load-path tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.put(key, value);
        store
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
