//! Entry model
//!
//! An entry is a single dated, typed, categorized money movement. Direction
//! comes entirely from its [`EntryKind`]; amounts are never signed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// The closed set of movement types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
    Investment,
}

impl EntryKind {
    /// All kinds in display order
    pub const ALL: [EntryKind; 3] = [Self::Expense, Self::Income, Self::Investment];

    /// Lowercase name as used in JSON and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Investment => "investment",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = EntryKindParseError;

    /// Accepts the English names and the Spanish ones the business used
    /// before the move to this tool (`gasto`, `ingreso`, `inversion`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "gasto" => Ok(Self::Expense),
            "income" | "ingreso" => Ok(Self::Income),
            "investment" | "inversion" | "inversión" => Ok(Self::Investment),
            other => Err(EntryKindParseError(other.to_string())),
        }
    }
}

/// Error returned when a string names no known entry kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKindParseError(pub String);

impl fmt::Display for EntryKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown entry type '{}' (expected expense, income or investment)",
            self.0
        )
    }
}

impl std::error::Error for EntryKindParseError {}

/// A recorded money movement
///
/// Serialized field names (`id`, `type`, `category`, `amount`, `date`,
/// `description`) are also the backup file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Free-form label, meaningful only within `kind`
    pub category: String,

    pub amount: Money,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entry {
    /// Create a new entry with a fresh ID
    pub fn new(
        kind: EntryKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            category: category.into(),
            amount,
            date,
            description: None,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_investment(&self) -> bool {
        self.kind == EntryKind::Investment
    }

    /// Check the store-side preconditions the aggregation engine relies on
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.category.trim().is_empty() {
            return Err(EntryValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind.as_str(),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyCategory,
    NegativeAmount(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("Gasto".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!(
            "inversion".parse::<EntryKind>().unwrap(),
            EntryKind::Investment
        );
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_validate() {
        let ok = Entry::new(EntryKind::Expense, "Gas", Money::from_units(30), date(2024, 5, 2));
        assert!(ok.validate().is_ok());

        let blank = Entry::new(EntryKind::Expense, "  ", Money::from_units(30), date(2024, 5, 2));
        assert_eq!(blank.validate(), Err(EntryValidationError::EmptyCategory));

        let negative = Entry::new(
            EntryKind::Income,
            "Sales",
            Money::from_cents(-1),
            date(2024, 5, 2),
        );
        assert!(matches!(
            negative.validate(),
            Err(EntryValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_blank_description_is_dropped() {
        let entry = Entry::new(EntryKind::Income, "Sales", Money::zero(), date(2024, 1, 1))
            .with_description("   ");
        assert_eq!(entry.description, None);
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = Entry::new(
            EntryKind::Investment,
            "Equipment",
            Money::from_cents(12550),
            date(2024, 5, 2),
        )
        .with_description("New oven");

        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["amount", "category", "date", "description", "id", "type"]
        );
        assert_eq!(object["type"], "investment");
        assert_eq!(object["date"], "2024-05-02");
        assert_eq!(object["amount"], 125.5);
    }

    #[test]
    fn test_display() {
        let entry = Entry::new(EntryKind::Expense, "Gas", Money::from_units(30), date(2024, 5, 6));
        assert_eq!(entry.to_string(), "2024-05-06 expense Gas $30.00");
    }
}
