//! Audit entries
//!
//! Each entry names the record it is about in daycare terms: a ledger entry
//! carries its kind, date, category and amount; an attendance entry is keyed
//! by subject and day and carries the time that was stamped.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::attendance::format_time;
use crate::models::{
    AttachmentId, AttendanceRecord, Category, ExpenseAttachment, Money, SubjectId, SubjectKind,
    Transaction, TransactionId, TransactionKind, DATE_FORMAT,
};

use super::diff::summarize_changes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Delete,
    CheckIn,
    CheckOut,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::CheckIn => "CHECK-IN",
            Operation::CheckOut => "CHECK-OUT",
        };
        f.pad(label)
    }
}

/// The record an entry is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum AuditSubject {
    Transaction {
        kind: TransactionKind,
        id: TransactionId,
        date: NaiveDate,
        category: String,
        amount: Money,
    },
    Attachment {
        id: AttachmentId,
        expense_id: TransactionId,
        file: String,
    },
    Attendance {
        kind: SubjectKind,
        subject_id: SubjectId,
        date: NaiveDate,
        time: Option<NaiveTime>,
    },
    Profile {
        kind: SubjectKind,
        id: SubjectId,
        name: String,
    },
    Category {
        kind: TransactionKind,
        name: String,
    },
}

impl AuditSubject {
    pub fn transaction(txn: &Transaction) -> Self {
        Self::Transaction {
            kind: txn.kind,
            id: txn.id,
            date: txn.date,
            category: txn.category.clone(),
            amount: txn.amount,
        }
    }

    pub fn attachment(attachment: &ExpenseAttachment) -> Self {
        Self::Attachment {
            id: attachment.id,
            expense_id: attachment.expense_id,
            file: attachment.original_filename.clone(),
        }
    }

    /// Attendance keyed by (subject, day) with the stamped time
    pub fn attendance(record: &AttendanceRecord, time: Option<NaiveTime>) -> Self {
        Self::Attendance {
            kind: record.subject_kind,
            subject_id: record.subject_id,
            date: record.date,
            time,
        }
    }

    pub fn profile(kind: SubjectKind, id: impl Into<SubjectId>, name: impl Into<String>) -> Self {
        Self::Profile {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn category(category: &Category) -> Self {
        Self::Category {
            kind: category.kind,
            name: category.name.clone(),
        }
    }
}

impl fmt::Display for AuditSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction {
                kind,
                id,
                date,
                category,
                amount,
            } => write!(
                f,
                "{} {} {} {} {}",
                kind,
                id,
                date.format(DATE_FORMAT),
                category,
                amount
            ),
            Self::Attachment {
                id,
                expense_id,
                file,
            } => write!(f, "Attachment {} {} on expense {}", id, file, expense_id),
            Self::Attendance {
                kind,
                subject_id,
                date,
                time,
            } => {
                write!(f, "{} {} on {}", kind, subject_id.get(), date.format(DATE_FORMAT))?;
                if let Some(time) = time {
                    write!(f, " at {}", format_time(*time))?;
                }
                Ok(())
            }
            Self::Profile { kind, id, name } => write!(f, "{} {} ({})", kind, id.get(), name),
            Self::Category { kind, name } => write!(f, "{} category {}", kind, name),
        }
    }
}

/// One audited operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub subject: AuditSubject,

    /// Snapshot before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Dotted-path change summary for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: AuditSubject) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn created<T: Serialize>(subject: AuditSubject, value: &T) -> Self {
        Self {
            after: serde_json::to_value(value).ok(),
            ..Self::new(Operation::Create, subject)
        }
    }

    pub fn updated<T: Serialize>(subject: AuditSubject, before: &T, after: &T) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            changes: summarize_changes(before, after),
            ..Self::new(Operation::Update, subject)
        }
    }

    pub fn deleted<T: Serialize>(subject: AuditSubject, value: &T) -> Self {
        Self {
            before: serde_json::to_value(value).ok(),
            ..Self::new(Operation::Delete, subject)
        }
    }

    /// A check-in or check-out; the subject carries the time
    pub fn attendance(operation: Operation, record: &AttendanceRecord) -> Self {
        let time = match operation {
            Operation::CheckOut => record.check_out,
            _ => record.check_in,
        };
        Self::new(operation, AuditSubject::attendance(record, time))
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject
        );

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}
