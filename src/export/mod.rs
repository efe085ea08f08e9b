//! Export module for Cashbook
//!
//! - JSON: backup and restore of the raw entry collection
//! - CSV: weekly and monthly series for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::{
    export_categories_csv, export_monthly_csv, export_summary_csv, export_weekly_csv,
};
pub use self::json::{backup_file_name, export_entries_json, import_entries_json};
