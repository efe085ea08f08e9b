use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};

use cashbook::cli::{
    handle_categories_command, handle_entry_command, handle_export_command,
    handle_import_command, handle_months_command, handle_summary_command, handle_weeks_command,
    EntryCommands, OutputFormat,
};
use cashbook::config::{paths::DATA_DIR_ENV, CashbookPaths, Settings};
use cashbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Small-business cashbook with work week and monthly summaries",
    long_about = "Cashbook records expenses, income and investments and summarizes them \
                  by Thursday-to-Sunday work week, by calendar month and by category. \
                  Balance is income minus investment."
)]
struct Cli {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (overrides the platform default)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Entry management commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Overall and current work week totals
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Totals per Thursday-to-Sunday work week, newest first
    Weeks {
        /// Number of recent weeks (defaults to the configured chart limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Write csv/json output to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per calendar month for one year
    Months {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Only one type's series (json output)
        #[arg(long)]
        field: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Write csv/json output to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per category, in order of first use
    Categories {
        /// Only this entry type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// List the suggested categories instead
        #[arg(long)]
        suggested: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Export all entries as a JSON backup
    Export {
        /// Output file or directory (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Write a dated backup into the backup directory
        #[arg(long, conflicts_with = "output")]
        backup: bool,
    },

    /// Import entries from a JSON backup
    Import {
        /// Backup file
        file: PathBuf,
        /// Replace all current entries instead of merging
        #[arg(long)]
        replace: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cashbook::init_tracing(cli.verbose);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => CashbookPaths::with_base_dir(dir),
        None => CashbookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Cashbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Record an entry with:");
            println!("  cashbook entry add income Sales 100 --date 2024-05-02");
        }
        Some(Commands::Config) => {
            println!("Cashbook Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Weekly chart limit: {}", settings.weekly_chart_limit);
        }
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Summary { format }) => {
            handle_summary_command(&storage, &settings, today, format)?;
        }
        Some(Commands::Weeks {
            limit,
            format,
            output,
        }) => {
            handle_weeks_command(&storage, &settings, limit, format, output)?;
        }
        Some(Commands::Months {
            year,
            field,
            format,
            output,
        }) => {
            let year = year.unwrap_or_else(|| today.year());
            handle_months_command(&storage, &settings, year, field, format, output)?;
        }
        Some(Commands::Categories {
            kind,
            suggested,
            format,
        }) => {
            handle_categories_command(&storage, &settings, kind, suggested, format)?;
        }
        Some(Commands::Export {
            output,
            pretty,
            backup,
        }) => {
            let output = if backup {
                Some(paths.backup_dir())
            } else {
                output
            };
            handle_export_command(&storage, today, output, pretty)?;
        }
        Some(Commands::Import { file, replace }) => {
            handle_import_command(&storage, &file, replace)?;
        }
        None => {
            println!("Cashbook - work week and monthly cashbook summaries");
            println!();
            println!("Run 'cashbook --help' for usage information.");
        }
    }

    Ok(())
}
