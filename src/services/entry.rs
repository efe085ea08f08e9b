//! Entry service
//!
//! Add, edit and delete entries with input validation. This is the only
//! place entries change; reports just read snapshots afterwards.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{Entry, EntryKind, Money, Period};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing entry; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub kind: Option<EntryKind>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    /// `Some("")` clears the description
    pub description: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }
}

/// Listing filter
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryFilter {
    pub period: Option<Period>,
    pub kind: Option<EntryKind>,
}

impl EntryFilter {
    fn matches(&self, entry: &Entry) -> bool {
        self.period.map_or(true, |p| p.contains(entry.date))
            && self.kind.map_or(true, |k| k == entry.kind)
    }
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new entry and persist it
    pub fn add(
        &self,
        kind: EntryKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
        description: Option<&str>,
    ) -> CashbookResult<Entry> {
        let mut entry = Entry::new(kind, category.trim(), amount, date);
        if let Some(description) = description {
            entry = entry.with_description(description);
        }
        entry
            .validate()
            .map_err(|e| CashbookError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        info!(id = %entry.id, kind = entry.kind.as_str(), amount = %entry.amount, "added entry");
        Ok(entry)
    }

    /// Resolve a short or full ID to exactly one entry
    pub fn find(&self, identifier: &str) -> CashbookResult<Entry> {
        let mut matches = self.storage.entries.find_by_prefix(identifier.trim())?;
        match matches.len() {
            0 => Err(CashbookError::entry_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(CashbookError::Validation(format!(
                "'{}' matches {} entries; use a longer ID",
                identifier, n
            ))),
        }
    }

    /// Apply `update` to the entry named by `identifier`
    pub fn update(&self, identifier: &str, update: EntryUpdate) -> CashbookResult<Entry> {
        if update.is_empty() {
            return Err(CashbookError::Validation("Nothing to update".into()));
        }

        let mut entry = self.find(identifier)?;
        if let Some(kind) = update.kind {
            entry.kind = kind;
        }
        if let Some(category) = update.category {
            entry.category = category.trim().to_string();
        }
        if let Some(amount) = update.amount {
            entry.amount = amount;
        }
        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(description) = update.description {
            entry = entry.with_description(description);
        }
        entry
            .validate()
            .map_err(|e| CashbookError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        info!(id = %entry.id, "updated entry");
        Ok(entry)
    }

    /// Delete the entry named by `identifier`, returning it
    pub fn delete(&self, identifier: &str) -> CashbookResult<Entry> {
        let entry = self.find(identifier)?;
        self.storage.entries.delete(entry.id)?;
        self.storage.entries.save()?;

        info!(id = %entry.id, "deleted entry");
        Ok(entry)
    }

    /// Entries matching `filter`, newest first
    pub fn list(&self, filter: EntryFilter) -> CashbookResult<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .storage
            .entries
            .get_all()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}
