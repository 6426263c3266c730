//! Category model
//!
//! Categories are free-text labels. The stored list only drives suggestions;
//! transactions may carry any category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionKind;

/// Income lines seeded on first open
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Sales", "Service Income", "Interest Income"];

/// Schedule C expense lines seeded on first open
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Advertising",
    "Car and Truck Expenses",
    "Commissions and Fees",
    "Contract Labor",
    "Depletion",
    "Depreciation",
    "Employee Benefit Programs",
    "Insurance",
    "Interest",
    "Legal and Professional Services",
    "Office Expenses",
    "Rent or Lease",
    "Repairs and Maintenance",
    "Supplies",
    "Taxes and Licenses",
    "Travel",
    "Utilities",
    "Wages",
];

/// Default category names for a transaction kind
pub fn default_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => DEFAULT_INCOME_CATEGORIES,
        TransactionKind::Expense => DEFAULT_EXPENSE_CATEGORIES,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub kind: TransactionKind,
    pub name: String,
}

impl Category {
    /// Normalize a category name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
        if name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if name.len() > 100 {
            return Err(CategoryValidationError::NameTooLong(name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
