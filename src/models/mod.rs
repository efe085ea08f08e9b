//! Core data models for Cashbook
//!
//! Entries, money amounts, identifiers and the reporting periods the
//! aggregation engine partitions entries into.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod period;

pub use category::{is_suggested, suggested_categories};
pub use entry::{Entry, EntryKind, EntryKindParseError, EntryValidationError};
pub use ids::EntryId;
pub use money::{Money, MoneyParseError};
pub use period::{
    month_bounds, months_of_year, week_window, weeks_spanning, Period, PeriodParseError,
    WorkWeek, WEEK_ANCHOR, WEEK_WINDOW_DAYS,
};
