//! # Storage Module
//!
//! A small key-value store that keeps each value in `<dir>/<key>.json`, and the
//! load/save helpers for the grocery list built on top of it.
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so a crash never leaves a half-written list behind.

use crate::grocery_list::GroceryList;
use crate::grocery_model::GroceryItem;
use crate::storage_errors::StorageError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Storage key of the grocery list
pub const GROCERY_LIST_KEY: &str = "groceryList";

/// Key-value store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!(root = %root.display(), "Opened JSON file store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Read the raw value stored under `key`
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key = %key, bytes = value.len(), "Read stored value");
                Ok(Some(value))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(key = %key, "No stored value");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Replace the value stored under `key`
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        file.persist(&path)?;
        debug!(key = %key, bytes = value.len(), "Stored value");
        Ok(())
    }

    /// Delete the value stored under `key`; returns whether it existed
    pub fn remove_item(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Load the grocery list; a missing value is an empty list
    pub fn load_grocery_list(&self) -> Result<GroceryList, StorageError> {
        match self.get_item(GROCERY_LIST_KEY)? {
            Some(json) => {
                let items: Vec<GroceryItem> = serde_json::from_str(&json)?;
                info!(items = items.len(), "Loaded grocery list");
                Ok(GroceryList::from_items(items))
            }
            None => Ok(GroceryList::new()),
        }
    }

    /// Save the grocery list as a JSON array of items
    pub fn save_grocery_list(&self, list: &GroceryList) -> Result<(), StorageError> {
        let json = serde_json::to_string(list.items())?;
        self.set_item(GROCERY_LIST_KEY, &json)?;
        info!(items = list.len(), "Saved grocery list");
        Ok(())
    }
}
