use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CategorizeError, Result};

/// Remembered description -> category label pairs, backed by a JSON file.
///
/// Keys are kept sorted so the saved document diffs cleanly between runs.
/// `save` rewrites the file in place; a crash mid-write can leave it truncated.
#[derive(Debug)]
pub struct MappingStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl MappingStore {
    /// Load the mapping at `path`. A missing file yields an empty mapping after
    /// creating its parent directories so the later save can succeed.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = if path.is_file() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| CategorizeError::Mapping {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            BTreeMap::new()
        };
        log::debug!("loaded {} known descriptions from {}", entries.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            CategorizeError::Mapping {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        log::debug!("saved {} known descriptions to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    pub fn get(&self, description: &str) -> Option<&str> {
        self.entries.get(description).map(String::as_str)
    }

    /// Remember a new description. An existing entry is never overwritten;
    /// returns whether the entry was added.
    pub fn insert(&mut self, description: &str, label: &str) -> bool {
        if self.entries.contains_key(description) {
            return false;
        }
        self.entries.insert(description.to_string(), label.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("cat_dict.json");
        let store = MappingStore::load(&path).unwrap();
        assert_eq!(store.len(), 0);
        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat_dict.json");
        let mut store = MappingStore::load(&path).unwrap();
        assert!(store.insert("STARBUCKS #123", "eating out"));
        assert!(store.insert("SAFEWAY 0042", "grocery"));
        store.save().unwrap();

        let loaded = MappingStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("STARBUCKS #123"), Some("eating out"));
        assert_eq!(loaded.get("SAFEWAY 0042"), Some("grocery"));
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn test_saved_document_is_flat_sorted_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat_dict.json");
        let mut store = MappingStore::load(&path).unwrap();
        store.insert("ZULU", "misc");
        store.insert("ALPHA", "gas");
        store.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.find("ALPHA").unwrap() < content.find("ZULU").unwrap());
        let raw: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(raw, serde_json::json!({"ALPHA": "gas", "ZULU": "misc"}));
    }

    #[test]
    fn test_insert_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MappingStore::load(&dir.path().join("d.json")).unwrap();
        assert!(store.insert("COSTCO WHSE", "costco"));
        assert!(!store.insert("COSTCO WHSE", "grocery"));
        assert_eq!(store.get("COSTCO WHSE"), Some("costco"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MappingStore::load(&dir.path().join("d.json")).unwrap();
        store.insert("STARBUCKS #123", "eating out");
        assert!(store.get("starbucks #123").is_none());
        assert!(store.get("STARBUCKS #123 ").is_none());
        assert!(store.get("STARBUCKS").is_none());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(MappingStore::load(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, "{\"A\": ").unwrap();
        let err = MappingStore::load(&path).unwrap_err();
        assert!(matches!(err, CategorizeError::Mapping { .. }));
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, "{\"OLD\": \"misc\", \"PADDING PADDING PADDING\": \"misc\"}").unwrap();
        let mut store = MappingStore::load(&path).unwrap();
        store.insert("NEW", "gas");
        store.save().unwrap();
        let reloaded = MappingStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.get("NEW"), Some("gas"));
    }
}
