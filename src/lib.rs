//! Cashbook - small-business cashbook with work week and monthly summaries
//!
//! Entries are dated, typed (expense, income, investment) money movements.
//! Every summary is recomputed from the current entry snapshot: overall
//! totals, Thursday-to-Sunday work weeks, calendar months and per-category
//! breakdowns, plus chart-ready series built from those.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: entries, money, and the period calendar
//! - `storage`: JSON file storage and the entry snapshot seam
//! - `services`: entry CRUD and period resolution
//! - `reports`: aggregates, buckets, series and the dashboard
//! - `export`: JSON backups and CSV series
//! - `display` / `cli`: terminal rendering and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashbook::models::{Entry, EntryKind, Money};
//! use cashbook::reports::{totals, weekly_buckets};
//!
//! let entries = vec![Entry::new(EntryKind::Income, "Sales", Money::from_units(100), date)];
//! let balance = totals(&entries).balance;
//! let weeks = weekly_buckets(&entries);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::CashbookError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` wins when set; otherwise the crate logs warnings, or
/// everything down to debug when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default = if verbose { "cashbook=debug" } else { "cashbook=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
