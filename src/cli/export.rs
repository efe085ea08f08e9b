//! CLI commands for JSON backup export and import

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{CashbookError, CashbookResult};
use crate::export::{backup_file_name, export_entries_json, import_entries_json};
use crate::storage::Storage;

/// Write every entry as a JSON array
///
/// With no output path the array goes to stdout. A directory output gets a
/// dated backup file name.
pub fn handle_export_command(
    storage: &Storage,
    today: NaiveDate,
    output: Option<PathBuf>,
    pretty: bool,
) -> CashbookResult<()> {
    let entries = storage.entries.get_all()?;

    let Some(path) = output else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        export_entries_json(&entries, &mut writer, pretty)?;
        return Ok(());
    };

    let path = if path.is_dir() {
        path.join(backup_file_name(today))
    } else {
        path
    };

    let file = File::create(&path).map_err(|e| {
        CashbookError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_entries_json(&entries, &mut writer, pretty)?;
    writer.flush()?;

    info!(count = entries.len(), path = %path.display(), "exported entries");
    println!("Exported {} entries to: {}", entries.len(), path.display());
    Ok(())
}

/// Load entries from a JSON backup
///
/// Imported entries are merged by ID, so re-importing the same backup is a
/// no-op. With `replace` the current collection is discarded first.
pub fn handle_import_command(storage: &Storage, file: &Path, replace: bool) -> CashbookResult<()> {
    let contents = fs::read_to_string(file).map_err(|e| {
        CashbookError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let entries = import_entries_json(&contents)?;
    let count = entries.len();

    if replace {
        storage.entries.replace_all(entries)?;
    } else {
        for entry in entries {
            storage.entries.upsert(entry)?;
        }
    }
    storage.entries.save()?;

    info!(count, replace, "imported entries");
    println!(
        "Imported {} entries ({} total)",
        count,
        storage.entries.count()?
    );
    Ok(())
}
