//! Service layer for Cashbook
//!
//! Business logic on top of the storage layer: entry validation and
//! persistence, and resolution of user-supplied periods.

pub mod entry;
pub mod period;

pub use entry::{EntryFilter, EntryService, EntryUpdate};
pub use period::PeriodService;
