//! JSON backup of the raw entry collection
//!
//! The backup is a plain JSON array with one object per entry, using the
//! entry field names (`id`, `type`, `category`, `amount`, `date`,
//! `description`). Aggregates are never exported; they are recomputed from
//! the entries on restore.

use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::{CashbookError, CashbookResult};
use crate::models::Entry;

/// Suggested file name for a backup taken on `date`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("cashbook-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Write `entries` as a JSON array
pub fn export_entries_json<W: Write>(
    entries: &[Entry],
    writer: &mut W,
    pretty: bool,
) -> CashbookResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, entries)
    } else {
        serde_json::to_writer(&mut *writer, entries)
    }
    .map_err(|e| CashbookError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CashbookError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and validate a backup produced by [`export_entries_json`]
pub fn import_entries_json(json_str: &str) -> CashbookResult<Vec<Entry>> {
    let entries: Vec<Entry> =
        serde_json::from_str(json_str).map_err(|e| CashbookError::Import(e.to_string()))?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.id) {
            return Err(CashbookError::Import(format!(
                "Duplicate entry id {}",
                entry.id.as_uuid()
            )));
        }
        entry
            .validate()
            .map_err(|e| CashbookError::Import(format!("Entry {}: {}", entry.id, e)))?;
    }

    Ok(entries)
}
