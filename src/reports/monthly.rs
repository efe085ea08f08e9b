//! Calendar month buckets for a full year

use chrono::NaiveDate;
use serde::Serialize;

use super::summary::totals;
use crate::models::{months_of_year, Entry, EntryKind, Money};

/// Sums for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    /// 1 = January
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub expense: Money,
    pub income: Money,
    pub investment: Money,
}

impl MonthBucket {
    /// Full month name ("January")
    pub fn name(&self) -> String {
        self.start.format("%B").to_string()
    }

    pub fn get(&self, kind: EntryKind) -> Money {
        match kind {
            EntryKind::Expense => self.expense,
            EntryKind::Income => self.income,
            EntryKind::Investment => self.investment,
        }
    }
}

/// Twelve buckets, January through December, for `year`
///
/// Months without entries are kept with zero sums.
pub fn monthly_buckets(entries: &[Entry], year: i32) -> Vec<MonthBucket> {
    months_of_year(year)
        .into_iter()
        .zip(1u32..)
        .map(|((start, end), month)| {
            let sums = totals(entries.iter().filter(|e| e.date >= start && e.date <= end));
            MonthBucket {
                year,
                month,
                start,
                end,
                expense: sums.expense,
                income: sums.income,
                investment: sums.investment,
            }
        })
        .collect()
}
