//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;
pub mod report;

pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, handle_import_command};
pub use report::{
    handle_categories_command, handle_months_command, handle_summary_command,
    handle_weeks_command, OutputFormat,
};

use chrono::NaiveDate;

use crate::error::{CashbookError, CashbookResult};
use crate::models::{EntryKind, Money};

/// Parse an entry type argument (English or Spanish name)
pub(crate) fn parse_kind(s: &str) -> CashbookResult<EntryKind> {
    s.parse::<EntryKind>()
        .map_err(|e| CashbookError::Validation(e.to_string()))
}

/// Parse an amount argument, rejecting negatives
pub(crate) fn parse_amount(s: &str) -> CashbookResult<Money> {
    let amount = Money::parse(s).map_err(|e| CashbookError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(CashbookError::Validation(format!(
            "Amount must not be negative: {}",
            s
        )));
    }
    Ok(amount)
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> CashbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        CashbookError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}
