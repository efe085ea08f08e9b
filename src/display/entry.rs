//! Entry display formatting

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Entry;

use super::report::truncate;

/// Render `date` with a user-supplied strftime format, falling back to ISO
fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of entries as a table
pub fn format_entry_list(entries: &[Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let rows = entries.iter().map(|entry| EntryRow {
        id: entry.id.to_string(),
        date: format_date(entry.date, &settings.date_format),
        kind: entry.kind.to_string(),
        category: truncate(&entry.category, 24),
        amount: entry.amount.format_with_symbol(&settings.currency_symbol),
        description: entry
            .description
            .as_deref()
            .map(|d| truncate(d, 32))
            .unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single entry's details
pub fn format_entry_details(entry: &Entry, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Entry:       {}\n", entry.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(entry.date, &settings.date_format)
    ));
    output.push_str(&format!("Type:        {}\n", entry.kind));
    output.push_str(&format!("Category:    {}\n", entry.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        entry.amount.format_with_symbol(&settings.currency_symbol)
    ));
    if let Some(description) = &entry.description {
        output.push_str(&format!("Description: {}\n", description));
    }
    output
}
