//! Period resolution for command-line input
//!
//! Turns strings such as "this-week" or "2024-05" into a [`Period`] relative
//! to an explicit "today", so results are reproducible.

use chrono::NaiveDate;

use crate::error::{CashbookError, CashbookResult};
use crate::models::Period;

/// Resolves user-supplied period references
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Work week containing today
    pub fn current_week(&self) -> Period {
        Period::work_week_of(self.today)
    }

    pub fn current_month(&self) -> Period {
        Period::month_of(self.today)
    }

    /// Parse a period string or fall back to the current work week
    pub fn parse_or_current(&self, period: Option<&str>) -> CashbookResult<Period> {
        match period {
            Some(s) => self.parse(s),
            None => Ok(self.current_week()),
        }
    }

    /// Parse a period reference
    ///
    /// Formats supported:
    /// - Relative: "this-week", "last-week", "next-week", "this-month",
    ///   "last-month", "next-month"
    /// - Month: "2024-05"
    /// - Work week: any date inside it, "2024-05-04"
    pub fn parse(&self, s: &str) -> CashbookResult<Period> {
        let relative = match s.trim().to_lowercase().as_str() {
            "this-week" | "week" | "current" => Some(self.current_week()),
            "last-week" | "prev-week" => Some(self.current_week().prev()),
            "next-week" => Some(self.current_week().next()),
            "this-month" | "month" => Some(self.current_month()),
            "last-month" | "prev-month" => Some(self.current_month().prev()),
            "next-month" => Some(self.current_month().next()),
            _ => None,
        };

        match relative {
            Some(period) => Ok(period),
            None => Period::parse(s)
                .map_err(|e| CashbookError::Validation(format!("{} (input: {})", e, s.trim()))),
        }
    }
}
