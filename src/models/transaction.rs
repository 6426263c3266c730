//! Transaction model
//!
//! Income and expense entries share one shape but live in two separate
//! tables. They are never merged; `TransactionKind` selects the table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Which ledger a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Backing table name
    pub const fn table(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub const fn all() -> [TransactionKind; 2] {
        [Self::Income, Self::Expense]
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction kind: {}", other)),
        }
    }
}

/// A stored income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    /// Expected to be positive, not enforced
    pub amount: Money,
    /// Free-text category, usually drawn from the category list
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// Field values for creating or replacing a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub notes: String,
}

impl TransactionInput {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Trim text fields and check that a category is present
    pub fn normalized(mut self) -> Result<Self, TransactionValidationError> {
        self.category = self.category.trim().to_string();
        self.notes = self.notes.trim().to_string();

        if self.category.is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(self)
    }

    pub fn into_transaction(self, id: TransactionId, kind: TransactionKind) -> Transaction {
        Transaction {
            id,
            kind,
            amount: self.amount,
            category: self.category,
            date: self.date,
            notes: self.notes,
        }
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
