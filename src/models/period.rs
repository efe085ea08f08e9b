//! Reporting periods and the period calculator
//!
//! The business reports on a custom "work week" that is anchored on Thursday
//! and spans four calendar days (Thursday through Sunday), plus ordinary
//! calendar months. Everything here is a pure function of its date arguments.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day the work week starts on
pub const WEEK_ANCHOR: Weekday = Weekday::Thu;

/// Days from the anchor to the last day of the window (Thursday + 3 = Sunday)
pub const WEEK_WINDOW_DAYS: i64 = 3;

const DAYS_PER_WEEK: i64 = 7;

/// A Thursday-to-Sunday reporting window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkWeek {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WorkWeek {
    /// Window starting on `start`; `start` is expected to be a Thursday
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(WEEK_WINDOW_DAYS),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Human-readable label, e.g. "May 02 - May 05, 2024"
    pub fn label(&self) -> String {
        if self.start.year() == self.end.year() {
            format!(
                "{} - {}",
                self.start.format("%b %d"),
                self.end.format("%b %d, %Y")
            )
        } else {
            format!(
                "{} - {}",
                self.start.format("%b %d, %Y"),
                self.end.format("%b %d, %Y")
            )
        }
    }
}

/// Compute the work week window for a reference date
///
/// The reference is shifted back by `(weekday - 4 + 7) mod 7` days, with
/// weekdays numbered Sunday=0..Saturday=6 and Thursday=4. A reference falling
/// on Monday to Wednesday therefore maps to the *previous* Thursday, whose
/// window has already ended; such dates lie outside their own window.
pub fn week_window(reference: NaiveDate) -> WorkWeek {
    let weekday = i64::from(reference.weekday().num_days_from_sunday());
    let anchor = i64::from(WEEK_ANCHOR.num_days_from_sunday());
    let shift = (weekday - anchor + DAYS_PER_WEEK) % DAYS_PER_WEEK;
    WorkWeek::starting(reference - Duration::days(shift))
}

/// Enumerate the Thursdays of every work week touched by `[min, max]`
///
/// Runs from `week_window(min).start` to `week_window(max).start` in steps of
/// seven days. Returns an empty sequence when `min > max`.
pub fn weeks_spanning(min: NaiveDate, max: NaiveDate) -> Vec<NaiveDate> {
    if min > max {
        return Vec::new();
    }

    let last = week_window(max).start;
    let mut current = week_window(min).start;
    let mut weeks = Vec::new();
    while current <= last {
        weeks.push(current);
        current = current + Duration::days(DAYS_PER_WEEK);
    }
    weeks
}

/// First and last day (inclusive) of a calendar month
///
/// # Panics
///
/// Panics if `month` is not in `1..=12` or `year` is outside chrono's
/// supported range. Callers supply valid calendar values.
pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month and year must form a valid calendar date");
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .expect("month end must be a valid calendar date");
    (start, end)
}

/// The twelve `(start, end)` month ranges of a year, January through December
pub fn months_of_year(year: i32) -> Vec<(NaiveDate, NaiveDate)> {
    (1..=12).map(|month| month_bounds(year, month)).collect()
}

/// A reporting period used to filter entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Period {
    /// The work week starting on the given Thursday
    WorkWeek { start: NaiveDate },

    /// A calendar month (e.g., "2024-05")
    Month { year: i32, month: u32 },
}

impl Period {
    /// Work week containing `date` under [`week_window`]
    pub fn work_week_of(date: NaiveDate) -> Self {
        Self::WorkWeek {
            start: week_window(date).start,
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::WorkWeek { start } => *start,
            Self::Month { year, month } => month_bounds(*year, *month).0,
        }
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::WorkWeek { start } => WorkWeek::starting(*start).end,
            Self::Month { year, month } => month_bounds(*year, *month).1,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub fn next(&self) -> Self {
        match self {
            Self::WorkWeek { start } => Self::WorkWeek {
                start: *start + Duration::days(DAYS_PER_WEEK),
            },
            Self::Month { year, month } if *month == 12 => Self::Month {
                year: *year + 1,
                month: 1,
            },
            Self::Month { year, month } => Self::Month {
                year: *year,
                month: *month + 1,
            },
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::WorkWeek { start } => Self::WorkWeek {
                start: *start - Duration::days(DAYS_PER_WEEK),
            },
            Self::Month { year, month } if *month == 1 => Self::Month {
                year: *year - 1,
                month: 12,
            },
            Self::Month { year, month } => Self::Month {
                year: *year,
                month: *month - 1,
            },
        }
    }

    /// Human-readable label ("May 02 - May 05, 2024" or "May 2024")
    pub fn label(&self) -> String {
        match self {
            Self::WorkWeek { start } => WorkWeek::starting(*start).label(),
            Self::Month { .. } => self.start_date().format("%B %Y").to_string(),
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Month: "2024-05"
    /// - Work week: "2024-05-02" (the work week `week_window` assigns to that date)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::work_week_of(date));
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self::Month { year, month })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkWeek { start } => write!(
                f,
                "{}..{}",
                start.format("%Y-%m-%d"),
                self.end_date().format("%Y-%m-%d")
            ),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
