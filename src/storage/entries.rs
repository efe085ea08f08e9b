//! Entry repository for JSON storage
//!
//! Manages loading and saving entries to entries.json. Entries are kept in
//! insertion order, which is also the order category breakdowns follow.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::CashbookError;
use crate::models::{Entry, EntryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable entry file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<Entry>,
}

/// Repository for entry persistence
pub struct EntryRepository {
    path: PathBuf,
    data: RwLock<Vec<Entry>>,
}

impl EntryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Entry>>, CashbookError> {
        self.data
            .read()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Entry>>, CashbookError> {
        self.data
            .write()
            .map_err(|e| CashbookError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load entries from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), CashbookError> {
        let file_data: EntryData = read_json(&self.path)?;
        debug!(count = file_data.entries.len(), "loaded entries");
        *self.write()? = file_data.entries;
        Ok(())
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), CashbookError> {
        let file_data = EntryData {
            entries: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, CashbookError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// All entries in insertion order
    pub fn get_all(&self) -> Result<Vec<Entry>, CashbookError> {
        Ok(self.read()?.clone())
    }

    /// Entries whose ID starts with `prefix` (display form or raw UUID)
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Entry>, CashbookError> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.id.matches_prefix(prefix))
            .cloned()
            .collect())
    }

    /// Insert a new entry at the end, or replace an existing one in place
    pub fn upsert(&self, entry: Entry) -> Result<(), CashbookError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => data.push(entry),
        }
        Ok(())
    }

    /// Remove an entry, returning whether it existed
    pub fn delete(&self, id: EntryId) -> Result<bool, CashbookError> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() != before)
    }

    /// Replace the whole collection (used by backup restore)
    pub fn replace_all(&self, entries: Vec<Entry>) -> Result<(), CashbookError> {
        *self.write()? = entries;
        Ok(())
    }

    pub fn count(&self) -> Result<usize, CashbookError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EntryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = EntryRepository::new(temp_dir.path().join("entries.json"));
        (temp_dir, repo)
    }

    fn sample(category: &str) -> Entry {
        Entry::new(
            EntryKind::Expense,
            category,
            Money::from_units(10),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        let first = sample("Gas");
        let second = sample("Agua");
        repo.upsert(first.clone()).unwrap();
        repo.upsert(second.clone()).unwrap();

        let mut edited = first.clone();
        edited.amount = Money::from_units(99);
        repo.upsert(edited).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].amount, Money::from_units(99));
        assert_eq!(all[1].id, second.id);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let entry = sample("Gas").with_description("Tank refill");
        let id = entry.id;
        repo.upsert(entry).unwrap();
        repo.save().unwrap();

        let reloaded = EntryRepository::new(temp_dir.path().join("entries.json"));
        reloaded.load().unwrap();
        let found = reloaded.get(id).unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("Tank refill"));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let entry = sample("Gas");
        let id = entry.id;
        repo.upsert(entry).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        let entry = sample("Gas");
        let short = entry.id.to_string();
        repo.upsert(entry).unwrap();
        repo.upsert(sample("Agua")).unwrap();

        let found = repo.find_by_prefix(&short).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Gas");
    }
}
