//! Display formatting for terminal output

pub mod entry;
pub mod report;

pub use entry::{format_entry_details, format_entry_list};
pub use report::{format_categories, format_months, format_summary, format_weeks};
