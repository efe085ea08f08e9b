//! Dashboard snapshot
//!
//! Bundles every aggregate a summary screen shows, computed from one entry
//! snapshot. A new dashboard is generated whenever the entries change.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::monthly::{monthly_buckets, MonthBucket};
use super::summary::{
    category_totals, current_week_totals, totals, CategoryTotals, CurrentWeekTotals, Totals,
};
use super::weekly::{weekly_buckets, WeekBucket};
use crate::error::CashbookResult;
use crate::models::Entry;
use crate::storage::EntrySource;

/// Every derived aggregate for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// The date treated as "now"
    pub as_of: NaiveDate,
    /// Year of the monthly series
    pub year: i32,
    pub entry_count: usize,
    pub totals: Totals,
    pub current_week: CurrentWeekTotals,
    pub categories: CategoryTotals,
    pub weeks: Vec<WeekBucket>,
    pub months: Vec<MonthBucket>,
}

impl Dashboard {
    /// Pull a snapshot from `source` and compute the dashboard over it
    pub fn generate<S>(source: &S, as_of: NaiveDate, year: i32) -> CashbookResult<Self>
    where
        S: EntrySource + ?Sized,
    {
        let entries = source.snapshot()?;
        Ok(Self::from_entries(&entries, as_of, year))
    }

    /// Compute the dashboard over an in-memory snapshot
    pub fn from_entries(entries: &[Entry], as_of: NaiveDate, year: i32) -> Self {
        debug!(entries = entries.len(), %as_of, year, "computing dashboard");
        Self {
            as_of,
            year,
            entry_count: entries.len(),
            totals: totals(entries),
            current_week: current_week_totals(entries, as_of),
            categories: category_totals(entries),
            weeks: weekly_buckets(entries),
            months: monthly_buckets(entries, year),
        }
    }

    /// Entries counted in `totals` but sitting outside every work week window
    pub fn entries_outside_weeks(&self) -> usize {
        let bucketed: usize = self.weeks.iter().map(|w| w.entries.len()).sum();
        self.entry_count - bucketed
    }
}
