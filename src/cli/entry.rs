//! Entry CLI commands
//!
//! Implements CLI commands for recording and maintaining cashbook entries.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_amount, parse_date, parse_kind};
use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::CashbookResult;
use crate::models::is_suggested;
use crate::services::{EntryFilter, EntryService, EntryUpdate, PeriodService};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new entry
    Add {
        /// Entry type (expense, income, investment)
        kind: String,
        /// Category label (e.g., "Gas")
        category: String,
        /// Amount (e.g., "30" or "30.00")
        amount: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Period (YYYY-MM, YYYY-MM-DD for its work week, this-week, last-month, ...)
        #[arg(short, long)]
        period: Option<String>,
        /// Only entries of this type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show entry details
    Show {
        /// Entry ID (the short form is enough)
        id: String,
    },

    /// Edit an entry
    Edit {
        /// Entry ID
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description (empty clears it)
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: EntryCommands,
) -> CashbookResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let entry = service.add(kind, &category, amount, date, description.as_deref())?;
            println!("Added entry: {}", entry);
            println!("  ID: {}", entry.id);
            if !is_suggested(kind, &entry.category) {
                println!("  Note: '{}' is a new {} category", entry.category, kind.as_str());
            }
        }

        EntryCommands::List {
            period,
            kind,
            limit,
        } => {
            let period = period
                .map(|p| PeriodService::new(today).parse(&p))
                .transpose()?;
            let kind = kind.map(|k| parse_kind(&k)).transpose()?;

            let mut entries = service.list(EntryFilter { period, kind })?;
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            if let Some(period) = period {
                println!("{}", period.label());
            }
            print!("{}", format_entry_list(&entries, settings));
        }

        EntryCommands::Show { id } => {
            let entry = service.find(&id)?;
            print!("{}", format_entry_details(&entry, settings));
        }

        EntryCommands::Edit {
            id,
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let update = EntryUpdate {
                kind: kind.map(|k| parse_kind(&k)).transpose()?,
                category,
                amount: amount.map(|a| parse_amount(&a)).transpose()?,
                date: date.map(|d| parse_date(&d)).transpose()?,
                description,
            };

            let entry = service.update(&id, update)?;
            println!("Updated entry: {}", entry);
        }

        EntryCommands::Delete { id } => {
            let entry = service.delete(&id)?;
            println!("Deleted entry: {}", entry);
        }
    }

    Ok(())
}
