//! # Persistence
//!
//! Key/value storage for raw encoded strings, the role `localStorage` plays
//! for the browser editor. Keys are flat names such as [`TEMPLATE_KEY`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Key the encoded template is stored under
pub const TEMPLATE_KEY: &str = "template";

/// Key the encoded variable-name list is stored under
pub const VARIABLE_NAMES_KEY: &str = "arrVarNames";

/// Storage abstraction for persisted editor state
pub trait Storage {
    /// Raw stored value, `None` when the key was never saved
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    fn save(&mut self, key: &str, raw: &str) -> io::Result<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path).map(Some)
    }

    fn save(&mut self, key: &str, raw: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), raw)
    }
}

/// In-memory storage for testing and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    pub entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, raw: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), raw.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, raw: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
