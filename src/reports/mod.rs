//! Aggregation engine for Cashbook
//!
//! Derives totals, work week buckets, category breakdowns and a monthly
//! series from an entry snapshot, then reshapes them into chart series.
//! Every function is a pure transformation of its input.

pub mod dashboard;
pub mod monthly;
pub mod series;
pub mod summary;
pub mod weekly;

pub use dashboard::Dashboard;
pub use monthly::{monthly_buckets, MonthBucket};
pub use series::{
    category_series, monthly_series, weekly_series, SeriesPoint, WeeklyPoint,
    DEFAULT_WEEKLY_LIMIT,
};
pub use summary::{
    category_totals, current_week_totals, totals, CategoryMap, CategoryTotals,
    CurrentWeekTotals, Totals,
};
pub use weekly::{weekly_buckets, WeekBucket};
