//! Stores for the set of selected item codes

use crate::error::{CatalogError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A set of selected item identifiers
///
/// Front ends receive a store instead of reaching for global state, so the
/// catalog and the selection can be tested apart.
pub trait SelectionStore {
    /// All selected identifiers
    fn get_all(&self) -> BTreeSet<String>;

    /// Select an identifier
    fn add(&mut self, id: &str) -> Result<()>;

    /// Deselect an identifier; unknown ids are ignored
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Deselect everything
    fn clear(&mut self) -> Result<()>;

    /// Check whether an identifier is selected
    fn contains(&self, id: &str) -> bool {
        self.get_all().contains(id)
    }

    /// Number of selected identifiers
    fn len(&self) -> usize {
        self.get_all().len()
    }

    /// Check if nothing is selected
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selection kept in memory only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySelection {
    ids: BTreeSet<String>,
}

impl MemorySelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelection {
    fn get_all(&self) -> BTreeSet<String> {
        self.ids.clone()
    }

    fn add(&mut self, id: &str) -> Result<()> {
        self.ids.insert(id.to_string());
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.ids.remove(id);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ids.clear();
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Selection persisted as a JSON array of strings
///
/// The file is rewritten after every change. A missing, unreadable or
/// corrupt file opens as an empty selection.
///
/// # Examples
///
/// ```no_run
/// use epicatalog::selection::{JsonFileSelection, SelectionStore};
///
/// let mut selection = JsonFileSelection::open("selected.json");
/// selection.add("CA-1234").unwrap();
/// assert!(selection.contains("CA-1234"));
/// ```
#[derive(Debug)]
pub struct JsonFileSelection {
    path: PathBuf,
    memory: MemorySelection,
}

impl JsonFileSelection {
    /// Open a selection file, falling back to an empty selection
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let ids = match Self::load(&path) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Ignoring selection file {:?}: {}", path, e);
                BTreeSet::new()
            }
        };

        JsonFileSelection {
            path,
            memory: MemorySelection { ids },
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeSet<String>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => {
                return Err(CatalogError::ReadError(format!(
                    "Failed to read selection file: {}",
                    e
                )))
            }
        };

        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        serde_json::from_str(&text)
            .map_err(|e| CatalogError::ReadError(format!("Invalid selection file: {}", e)))
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<()> {
        let json = serde_json::to_string(ids)
            .map_err(|e| CatalogError::WriteError(format!("Failed to encode selection: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| CatalogError::WriteError(format!("Failed to write selection file: {}", e)))
    }

    /// Persist `ids`, then make them the current selection
    ///
    /// On a failed write the in-memory selection is left untouched.
    fn commit(&mut self, ids: BTreeSet<String>) -> Result<()> {
        self.save(&ids)?;
        self.memory.ids = ids;
        Ok(())
    }
}

impl SelectionStore for JsonFileSelection {
    fn get_all(&self) -> BTreeSet<String> {
        self.memory.get_all()
    }

    fn add(&mut self, id: &str) -> Result<()> {
        let mut ids = self.memory.get_all();
        ids.insert(id.to_string());
        self.commit(ids)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let mut ids = self.memory.get_all();
        ids.remove(id);
        self.commit(ids)
    }

    fn clear(&mut self) -> Result<()> {
        self.commit(BTreeSet::new())
    }

    fn contains(&self, id: &str) -> bool {
        self.memory.contains(id)
    }

    fn len(&self) -> usize {
        self.memory.len()
    }
}
