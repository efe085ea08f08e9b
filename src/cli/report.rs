//! CLI commands for reports
//!
//! Summary, work week, monthly and category views over the current entries.
//! Every command recomputes its aggregates from a fresh snapshot.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

use super::parse_kind;
use crate::config::Settings;
use crate::display::{format_categories, format_months, format_summary, format_weeks};
use crate::error::{CashbookError, CashbookResult};
use crate::export::{
    export_categories_csv, export_monthly_csv, export_summary_csv, export_weekly_csv,
};
use crate::models::{suggested_categories, EntryKind};
use crate::reports::{
    category_series, category_totals, monthly_buckets, monthly_series, weekly_buckets,
    weekly_series, CurrentWeekTotals, Dashboard, Totals,
};
use crate::storage::{EntrySource, Storage};

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// Chart series as CSV
    Csv,
    /// Aggregates as JSON
    Json,
}

/// Open `output` for writing, or stdout when absent
fn open_output(output: Option<&PathBuf>) -> CashbookResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CashbookError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// `--output` only applies to machine-readable formats
fn check_output(format: OutputFormat, output: Option<&PathBuf>) -> CashbookResult<()> {
    if format == OutputFormat::Table && output.is_some() {
        return Err(CashbookError::Validation(
            "--output requires --format csv or --format json".into(),
        ));
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&PathBuf>) -> CashbookResult<()> {
    let mut writer = open_output(output)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    format: OutputFormat,
) -> CashbookResult<()> {
    let dashboard = Dashboard::generate(&storage.entries, today, today.year())?;

    match format {
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct SummaryOutput<'a> {
                as_of: NaiveDate,
                entry_count: usize,
                totals: &'a Totals,
                current_week: &'a CurrentWeekTotals,
                entries_outside_weeks: usize,
            }
            write_json(
                &SummaryOutput {
                    as_of: dashboard.as_of,
                    entry_count: dashboard.entry_count,
                    totals: &dashboard.totals,
                    current_week: &dashboard.current_week,
                    entries_outside_weeks: dashboard.entries_outside_weeks(),
                },
                None,
            )
        }
        OutputFormat::Csv => export_summary_csv(&dashboard, io::stdout().lock()),
        OutputFormat::Table => {
            print!("{}", format_summary(&dashboard, settings));
            Ok(())
        }
    }
}

/// Handle the weeks command
pub fn handle_weeks_command(
    storage: &Storage,
    settings: &Settings,
    limit: Option<usize>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> CashbookResult<()> {
    check_output(format, output.as_ref())?;

    let entries = storage.entries.snapshot()?;
    let buckets = weekly_buckets(&entries);
    let limit = limit.unwrap_or(settings.weekly_chart_limit);
    let bucketed: usize = buckets.iter().map(|b| b.entries.len()).sum();
    let outside = entries.len() - bucketed;

    match format {
        OutputFormat::Table => print!("{}", format_weeks(&buckets, limit, settings)),
        OutputFormat::Csv => {
            let points = weekly_series(&buckets, limit);
            let mut writer = open_output(output.as_ref())?;
            export_weekly_csv(&points, &mut writer)?;
            writer.flush()?;
            if let Some(path) = &output {
                println!("Weekly series exported to: {}", path.display());
            }
        }
        OutputFormat::Json => {
            let recent: Vec<_> = buckets.into_iter().take(limit).collect();
            write_json(&recent, output.as_ref())?;
        }
    }

    if outside > 0 && format == OutputFormat::Table {
        println!(
            "{} Monday-Wednesday entries are not part of any work week; see 'summary' for overall totals.",
            outside
        );
    }

    Ok(())
}

/// Handle the months command
pub fn handle_months_command(
    storage: &Storage,
    settings: &Settings,
    year: i32,
    field: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> CashbookResult<()> {
    check_output(format, output.as_ref())?;
    if field.is_some() && format != OutputFormat::Json {
        return Err(CashbookError::Validation(
            "--field requires --format json".into(),
        ));
    }

    let entries = storage.entries.snapshot()?;
    let buckets = monthly_buckets(&entries, year);

    match format {
        OutputFormat::Table => print!("{}", format_months(year, &buckets, settings)),
        OutputFormat::Csv => {
            let mut writer = open_output(output.as_ref())?;
            export_monthly_csv(&buckets, &mut writer)?;
            writer.flush()?;
            if let Some(path) = &output {
                println!("Monthly series exported to: {}", path.display());
            }
        }
        OutputFormat::Json => match field {
            Some(field) => {
                let kind = parse_kind(&field)?;
                write_json(&monthly_series(&buckets, kind), output.as_ref())?;
            }
            None => write_json(&buckets, output.as_ref())?,
        },
    }

    Ok(())
}

/// Handle the categories command
pub fn handle_categories_command(
    storage: &Storage,
    settings: &Settings,
    kind: Option<String>,
    suggested: bool,
    format: OutputFormat,
) -> CashbookResult<()> {
    let kinds: Vec<EntryKind> = match kind {
        Some(k) => vec![parse_kind(&k)?],
        None => EntryKind::ALL.to_vec(),
    };

    if suggested {
        for kind in kinds {
            println!("{}: {}", kind, suggested_categories(kind).join(", "));
        }
        return Ok(());
    }

    let entries = storage.entries.snapshot()?;
    let categories = category_totals(&entries);

    match format {
        OutputFormat::Json if kinds.len() == 1 => {
            write_json(&category_series(categories.get(kinds[0])), None)?;
        }
        OutputFormat::Json => write_json(&categories, None)?,
        OutputFormat::Csv => export_categories_csv(&categories, &kinds, io::stdout().lock())?,
        OutputFormat::Table => {
            for kind in kinds {
                print!("{}", format_categories(kind, categories.get(kind), settings));
            }
        }
    }

    Ok(())
}
