//! Chart-ready series
//!
//! Reshapes aggregator output into labelled sequences. No sums are computed
//! here; every value is copied from a bucket or category map.

use serde::Serialize;

use super::monthly::MonthBucket;
use super::summary::CategoryMap;
use super::weekly::WeekBucket;
use crate::models::{EntryKind, Money};

/// Number of weeks charted when the caller does not choose
pub const DEFAULT_WEEKLY_LIMIT: usize = 8;

/// A single labelled value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: Money,
}

/// One week of a grouped income/expense/investment chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPoint {
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub investment: Money,
}

/// One point per category, in the map's own order
pub fn category_series(categories: &CategoryMap) -> Vec<SeriesPoint> {
    categories
        .iter()
        .map(|(name, value)| SeriesPoint {
            label: name.to_string(),
            value,
        })
        .collect()
}

/// The most recent `limit` weeks in chronological order
///
/// `buckets` are expected newest first, as produced by
/// [`weekly_buckets`](super::weekly::weekly_buckets). Each point is labelled
/// by its week start date.
pub fn weekly_series(buckets: &[WeekBucket], limit: usize) -> Vec<WeeklyPoint> {
    buckets
        .iter()
        .take(limit)
        .rev()
        .map(|bucket| WeeklyPoint {
            label: bucket.week_start.format("%Y-%m-%d").to_string(),
            income: bucket.totals.income,
            expense: bucket.totals.expense,
            investment: bucket.totals.investment,
        })
        .collect()
}

/// One kind's monthly values labelled by month name
pub fn monthly_series(buckets: &[MonthBucket], field: EntryKind) -> Vec<SeriesPoint> {
    buckets
        .iter()
        .map(|bucket| SeriesPoint {
            label: bucket.name(),
            value: bucket.get(field),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use crate::reports::monthly::monthly_buckets;
    use crate::reports::summary::category_totals;
    use crate::reports::weekly::weekly_buckets;
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One income entry on each of `count` consecutive Thursdays from 2024-01-04
    fn weekly_income(count: i64) -> Vec<Entry> {
        (0..count)
            .map(|week| {
                Entry::new(
                    EntryKind::Income,
                    "Sales",
                    Money::from_units(week + 1),
                    date(2024, 1, 4) + Duration::days(7 * week),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(category_series(&CategoryMap::new()).is_empty());
        assert!(weekly_series(&[], DEFAULT_WEEKLY_LIMIT).is_empty());
        assert!(monthly_series(&[], EntryKind::Income).is_empty());
    }

    #[test]
    fn test_category_series_keeps_map_order() {
        let on = date(2024, 5, 2);
        let entries = vec![
            Entry::new(EntryKind::Expense, "Gas", Money::from_units(30), on),
            Entry::new(EntryKind::Expense, "Agua", Money::from_units(10), on),
            Entry::new(EntryKind::Expense, "Gas", Money::from_units(20), on),
        ];
        let series = category_series(&category_totals(&entries).expense);
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    label: "Gas".into(),
                    value: Money::from_units(50)
                },
                SeriesPoint {
                    label: "Agua".into(),
                    value: Money::from_units(10)
                },
            ]
        );
    }

    #[test]
    fn test_weekly_series_takes_latest_in_ascending_order() {
        let buckets = weekly_buckets(&weekly_income(10));
        let series = weekly_series(&buckets, DEFAULT_WEEKLY_LIMIT);

        assert_eq!(series.len(), 8);
        // Weeks 3..=10 survive, oldest first
        assert_eq!(series[0].label, "2024-01-18");
        assert_eq!(series[0].income, Money::from_units(3));
        assert_eq!(series[7].label, "2024-03-07");
        assert_eq!(series[7].income, Money::from_units(10));
    }

    #[test]
    fn test_weekly_series_with_fewer_weeks_than_limit() {
        let buckets = weekly_buckets(&weekly_income(3));
        let labels: Vec<_> = weekly_series(&buckets, 8)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["2024-01-04", "2024-01-11", "2024-01-18"]);
    }

    #[test]
    fn test_monthly_series() {
        let entries = weekly_income(5);
        let series = monthly_series(&monthly_buckets(&entries, 2024), EntryKind::Income);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].label, "January");
        // Jan 4, 11, 18, 25 -> 1 + 2 + 3 + 4
        assert_eq!(series[0].value, Money::from_units(10));
        assert_eq!(series[1].value, Money::from_units(5));
        assert!(series[2].value.is_zero());
    }
}
