//! CSV export of chart series

use std::io::Write;

use crate::error::CashbookResult;
use crate::models::EntryKind;
use crate::reports::{CategoryTotals, Dashboard, MonthBucket, Totals, WeeklyPoint};

fn totals_record(scope: &str, start: String, end: String, totals: &Totals) -> [String; 7] {
    [
        scope.to_string(),
        start,
        end,
        totals.income.to_decimal_string(),
        totals.expense.to_decimal_string(),
        totals.investment.to_decimal_string(),
        totals.balance.to_decimal_string(),
    ]
}

/// Write overall and current work week totals, one row each
pub fn export_summary_csv<W: Write>(dashboard: &Dashboard, writer: W) -> CashbookResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "scope",
        "start",
        "end",
        "income",
        "expense",
        "investment",
        "balance",
    ])?;
    csv.write_record(totals_record(
        "all",
        String::new(),
        String::new(),
        &dashboard.totals,
    ))?;
    let week = &dashboard.current_week.week;
    csv.write_record(totals_record(
        "week",
        week.start.format("%Y-%m-%d").to_string(),
        week.end.format("%Y-%m-%d").to_string(),
        &dashboard.current_week.totals,
    ))?;
    csv.flush()?;
    Ok(())
}

/// Write `type,category,amount` rows in first-occurrence order
pub fn export_categories_csv<W: Write>(
    categories: &CategoryTotals,
    kinds: &[EntryKind],
    writer: W,
) -> CashbookResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["type", "category", "amount"])?;
    for &kind in kinds {
        for (name, amount) in categories.get(kind).iter() {
            csv.write_record([kind.as_str(), name, amount.to_decimal_string().as_str()])?;
        }
    }
    csv.flush()?;
    Ok(())
}

/// Write weekly points as `week_start,income,expense,investment`
pub fn export_weekly_csv<W: Write>(points: &[WeeklyPoint], writer: W) -> CashbookResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["week_start", "income", "expense", "investment"])?;
    for point in points {
        csv.write_record([
            point.label.clone(),
            point.income.to_decimal_string(),
            point.expense.to_decimal_string(),
            point.investment.to_decimal_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the twelve month buckets as `month,income,expense,investment`
pub fn export_monthly_csv<W: Write>(buckets: &[MonthBucket], writer: W) -> CashbookResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["month", "income", "expense", "investment"])?;
    for bucket in buckets {
        csv.write_record([
            bucket.name(),
            bucket.income.to_decimal_string(),
            bucket.expense.to_decimal_string(),
            bucket.investment.to_decimal_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
