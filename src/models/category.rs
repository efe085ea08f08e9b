//! Suggested categories
//!
//! Categories are free-form labels. These lists only seed prompts and shell
//! completion; nothing in the crate rejects a category that is not listed.

use super::entry::EntryKind;

const EXPENSE_SUGGESTIONS: &[&str] = &[
    "Rent",
    "Gas",
    "Agua",
    "Electricity",
    "Internet",
    "Supplies",
    "Payroll",
    "Maintenance",
    "Taxes",
    "Other",
];

const INCOME_SUGGESTIONS: &[&str] = &["Sales", "Services", "Tips", "Refunds", "Other"];

const INVESTMENT_SUGGESTIONS: &[&str] = &[
    "Equipment",
    "Inventory",
    "Renovation",
    "Marketing",
    "Other",
];

/// Suggested category names for a kind, in display order
pub fn suggested_categories(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Expense => EXPENSE_SUGGESTIONS,
        EntryKind::Income => INCOME_SUGGESTIONS,
        EntryKind::Investment => INVESTMENT_SUGGESTIONS,
    }
}

/// Whether `name` matches a suggestion for `kind`, ignoring case
pub fn is_suggested(kind: EntryKind, name: &str) -> bool {
    suggested_categories(kind)
        .iter()
        .any(|s| s.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_suggestions() {
        for kind in EntryKind::ALL {
            assert!(!suggested_categories(kind).is_empty());
        }
    }

    #[test]
    fn test_is_suggested_ignores_case() {
        assert!(is_suggested(EntryKind::Expense, "gas"));
        assert!(is_suggested(EntryKind::Income, " Sales "));
        assert!(!is_suggested(EntryKind::Income, "Gas"));
    }
}
