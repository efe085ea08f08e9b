//! Running totals, current work week totals and per-category breakdowns
//!
//! All functions here are pure: they read an entry snapshot and build a fresh
//! value. Nothing is cached between calls.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::{week_window, Entry, EntryKind, Money, WorkWeek};

/// Sums per entry kind plus the derived balance
///
/// `balance` is income minus investment. Expenses are deliberately left out
/// of the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub expense: Money,
    pub income: Money,
    pub investment: Money,
    pub balance: Money,
}

impl Totals {
    /// Sum for a single kind
    pub fn get(&self, kind: EntryKind) -> Money {
        match kind {
            EntryKind::Expense => self.expense,
            EntryKind::Income => self.income,
            EntryKind::Investment => self.investment,
        }
    }
}

/// Sum amounts per kind in a single pass
pub fn totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut totals = Totals::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Expense => totals.expense += entry.amount,
            EntryKind::Income => totals.income += entry.amount,
            EntryKind::Investment => totals.investment += entry.amount,
        }
    }
    totals.balance = totals.income - totals.investment;
    totals
}

/// Totals restricted to the work week containing "now"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentWeekTotals {
    pub week: WorkWeek,
    pub label: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Totals over the entries dated inside `week_window(now)`, bounds inclusive
///
/// When `now` is a Monday, Tuesday or Wednesday the window is the one that
/// ended the previous Sunday.
pub fn current_week_totals(entries: &[Entry], now: NaiveDate) -> CurrentWeekTotals {
    let week = week_window(now);
    CurrentWeekTotals {
        week,
        label: week.label(),
        totals: totals(entries.iter().filter(|e| week.contains(e.date))),
    }
}

/// Category name to summed amount, in order of first occurrence
///
/// Backed by an association list so iteration order is stable and matches
/// the order categories first appear in the snapshot. Consumers wanting a
/// sorted view sort explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    items: Vec<(String, Money)>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, inserting it at the end if absent
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.items.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.items.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.items
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.items.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every category
    pub fn total(&self) -> Money {
        self.items.iter().map(|(_, total)| *total).sum()
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (name, total) in &self.items {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

/// One [`CategoryMap`] per entry kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub expense: CategoryMap,
    pub income: CategoryMap,
    pub investment: CategoryMap,
}

impl CategoryTotals {
    pub fn get(&self, kind: EntryKind) -> &CategoryMap {
        match kind {
            EntryKind::Expense => &self.expense,
            EntryKind::Income => &self.income,
            EntryKind::Investment => &self.investment,
        }
    }

    fn get_mut(&mut self, kind: EntryKind) -> &mut CategoryMap {
        match kind {
            EntryKind::Expense => &mut self.expense,
            EntryKind::Income => &mut self.income,
            EntryKind::Investment => &mut self.investment,
        }
    }
}

/// Group amounts by category, separately for each kind
pub fn category_totals(entries: &[Entry]) -> CategoryTotals {
    let mut result = CategoryTotals::default();
    for entry in entries {
        result.get_mut(entry.kind).add(&entry.category, entry.amount);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(kind: EntryKind, category: &str, units: i64, on: NaiveDate) -> Entry {
        Entry::new(kind, category, Money::from_units(units), on)
    }

    fn mixed_entries() -> Vec<Entry> {
        vec![
            entry(EntryKind::Income, "Sales", 500, date(2024, 5, 2)),
            entry(EntryKind::Expense, "Gas", 30, date(2024, 5, 3)),
            entry(EntryKind::Investment, "Equipment", 120, date(2024, 5, 6)),
            entry(EntryKind::Income, "Services", 80, date(2024, 5, 10)),
            entry(EntryKind::Expense, "Rent", 200, date(2024, 5, 11)),
        ]
    }

    #[test]
    fn test_totals_empty() {
        let empty: Vec<Entry> = Vec::new();
        let result = totals(&empty);
        assert_eq!(result, Totals::default());
        assert!(result.balance.is_zero());
    }

    #[test]
    fn test_balance_excludes_expense() {
        let entries = mixed_entries();
        let result = totals(&entries);
        assert_eq!(result.income, Money::from_units(580));
        assert_eq!(result.expense, Money::from_units(230));
        assert_eq!(result.investment, Money::from_units(120));
        assert_eq!(result.balance, result.income - result.investment);
        assert_eq!(result.balance, Money::from_units(460));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let entries = vec![entry(EntryKind::Investment, "Equipment", 50, date(2024, 1, 4))];
        assert_eq!(totals(&entries).balance, Money::from_units(-50));
    }

    #[test]
    fn test_current_week_totals() {
        let entries = mixed_entries();
        let current = current_week_totals(&entries, date(2024, 5, 4));

        assert_eq!(current.week.start, date(2024, 5, 2));
        assert_eq!(current.label, "May 02 - May 05, 2024");
        assert_eq!(current.totals.income, Money::from_units(500));
        assert_eq!(current.totals.expense, Money::from_units(30));
        // The Monday investment falls outside the Thursday-Sunday window
        assert!(current.totals.investment.is_zero());
    }

    #[test]
    fn test_current_week_on_monday_uses_previous_window() {
        let entries = mixed_entries();
        let current = current_week_totals(&entries, date(2024, 5, 6));
        assert_eq!(current.week.start, date(2024, 5, 2));
        assert_eq!(current.week.end, date(2024, 5, 5));
        assert!(current.totals.investment.is_zero());
    }

    #[test]
    fn test_category_totals_scenario() {
        let on = date(2024, 5, 2);
        let entries = vec![
            entry(EntryKind::Expense, "Gas", 30, on),
            entry(EntryKind::Expense, "Gas", 20, on),
            entry(EntryKind::Expense, "Agua", 10, on),
        ];
        let result = category_totals(&entries);

        let expense: Vec<_> = result.expense.iter().collect();
        assert_eq!(
            expense,
            vec![("Gas", Money::from_units(50)), ("Agua", Money::from_units(10))]
        );
        assert!(result.income.is_empty());
        assert!(result.investment.is_empty());
    }

    #[test]
    fn test_category_totals_keep_first_occurrence_order() {
        let on = date(2024, 5, 2);
        let entries = vec![
            entry(EntryKind::Expense, "Rent", 1, on),
            entry(EntryKind::Expense, "Agua", 1, on),
            entry(EntryKind::Expense, "Rent", 1, on),
            entry(EntryKind::Expense, "Gas", 1, on),
        ];
        let names: Vec<_> = category_totals(&entries)
            .expense
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        assert_eq!(names, ["Rent", "Agua", "Gas"]);
    }

    #[test]
    fn test_category_sums_match_totals() {
        let entries = mixed_entries();
        let per_category = category_totals(&entries);
        let overall = totals(&entries);
        for kind in EntryKind::ALL {
            assert_eq!(per_category.get(kind).total(), overall.get(kind));
        }
    }

    #[test]
    fn test_same_category_name_is_separate_per_kind() {
        let on = date(2024, 5, 2);
        let entries = vec![
            entry(EntryKind::Expense, "Other", 5, on),
            entry(EntryKind::Income, "Other", 7, on),
        ];
        let result = category_totals(&entries);
        assert_eq!(result.expense.get("Other"), Some(Money::from_units(5)));
        assert_eq!(result.income.get("Other"), Some(Money::from_units(7)));
    }

    #[test]
    fn test_category_map_serializes_in_order() {
        let mut map = CategoryMap::new();
        map.add("Gas", Money::from_cents(5000));
        map.add("Agua", Money::from_cents(1000));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"Gas":50.0,"Agua":10.0}"#
        );
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let entries = mixed_entries();
        assert_eq!(totals(&entries), totals(&entries));
        assert_eq!(category_totals(&entries), category_totals(&entries));
        assert_eq!(
            current_week_totals(&entries, date(2024, 5, 10)),
            current_week_totals(&entries, date(2024, 5, 10))
        );
    }
}
