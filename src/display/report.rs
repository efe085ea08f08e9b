//! Report formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{EntryKind, Money};
use crate::reports::{CategoryMap, Dashboard, MonthBucket, Totals, WeekBucket};

fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a percentage share with appropriate precision
pub fn format_share(part: Money, whole: Money) -> String {
    if whole.is_zero() {
        return "-".to_string();
    }
    let pct = part.cents() as f64 / whole.cents() as f64 * 100.0;
    if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

fn format_totals_block(totals: &Totals, settings: &Settings) -> String {
    format!(
        "  Income:      {:>14}\n  Expense:     {:>14}\n  Investment:  {:>14}\n  Balance:     {:>14}\n",
        money(totals.income, settings),
        money(totals.expense, settings),
        money(totals.investment, settings),
        money(totals.balance, settings),
    )
}

/// Overall and current-week totals
pub fn format_summary(dashboard: &Dashboard, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "All time ({} entries)\n",
        dashboard.entry_count
    ));
    output.push_str(&format_totals_block(&dashboard.totals, settings));
    output.push('\n');
    output.push_str(&format!("This week: {}\n", dashboard.current_week.label));
    output.push_str(&format_totals_block(&dashboard.current_week.totals, settings));

    let outside = dashboard.entries_outside_weeks();
    if outside > 0 {
        output.push_str(&format!(
            "\nNote: {} Monday-Wednesday {} outside the Thursday-Sunday weeks.\n",
            outside,
            if outside == 1 { "entry falls" } else { "entries fall" }
        ));
    }
    output.push_str("\nBalance is income minus investment; expenses are not deducted.\n");
    output
}

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Work week table, newest first, at most `limit` rows
pub fn format_weeks(buckets: &[WeekBucket], limit: usize, settings: &Settings) -> String {
    if buckets.is_empty() {
        return "No work weeks with entries.\n".to_string();
    }

    let rows = buckets.iter().take(limit).map(|bucket| WeekRow {
        week: bucket.label(),
        entries: bucket.entries.len(),
        income: money(bucket.totals.income, settings),
        expense: money(bucket.totals.expense, settings),
        investment: money(bucket.totals.investment, settings),
        balance: money(bucket.totals.balance, settings),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Investment")]
    investment: String,
}

/// Twelve-month table for one year
pub fn format_months(year: i32, buckets: &[MonthBucket], settings: &Settings) -> String {
    let rows = buckets.iter().map(|bucket| MonthRow {
        month: bucket.name(),
        income: money(bucket.income, settings),
        expense: money(bucket.expense, settings),
        investment: money(bucket.investment, settings),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{}\n", year, table)
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Category breakdown for one kind, in first-occurrence order
pub fn format_categories(kind: EntryKind, categories: &CategoryMap, settings: &Settings) -> String {
    if categories.is_empty() {
        return format!("No {} entries.\n", kind.as_str());
    }

    let total = categories.total();
    let rows = categories.iter().map(|(name, amount)| CategoryRow {
        category: truncate(name, 32),
        amount: money(amount, settings),
        share: format_share(amount, total),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{}\n", kind, table)
}
