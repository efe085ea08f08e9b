//! User settings for Cashbook
//!
//! Display preferences only; none of them change how aggregates are computed.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::CashbookPaths;
use crate::error::CashbookError;
use crate::reports::series::DEFAULT_WEEKLY_LIMIT;

/// User settings persisted to config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of recent work weeks shown by the weekly chart
    #[serde(default = "default_weekly_chart_limit")]
    pub weekly_chart_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_weekly_chart_limit() -> usize {
    DEFAULT_WEEKLY_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            weekly_chart_limit: default_weekly_chart_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashbookPaths) -> Result<Self, CashbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted here; `init` decides when to write
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CashbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CashbookError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break rendering
    pub fn validate(&self) -> Result<(), CashbookError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CashbookError::Config(format!(
                "Invalid date_format '{}' in settings",
                self.date_format
            )));
        }
        if self.weekly_chart_limit == 0 {
            return Err(CashbookError::Config(
                "weekly_chart_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashbookPaths) -> Result<(), CashbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CashbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CashbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
