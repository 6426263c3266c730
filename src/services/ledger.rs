//! Ledger service
//!
//! Create, edit and delete income and expense entries, and manage the files
//! attached to expenses.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditSubject};
use crate::error::{DaycareError, DaycareResult};
use crate::models::attachment::{managed_file_name, original_file_name};
use crate::models::{
    DateRange, ExpenseAttachment, Transaction, TransactionId, TransactionInput, TransactionKind,
};
use crate::storage::Storage;

/// Service for income and expense entries
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(
        &self,
        kind: TransactionKind,
        input: TransactionInput,
    ) -> DaycareResult<Transaction> {
        let input = input
            .normalized()
            .map_err(|e| DaycareError::Validation(e.to_string()))?;

        let id = self.storage.transactions().insert(kind, &input)?;
        let txn = input.into_transaction(id, kind);

        self.storage
            .record_audit(|| AuditEntry::created(AuditSubject::transaction(&txn), &txn));
        info!(kind = %kind, id = id.get(), amount = %txn.amount, "transaction recorded");

        Ok(txn)
    }

    pub fn get(&self, kind: TransactionKind, id: TransactionId) -> DaycareResult<Transaction> {
        self.storage
            .transactions()
            .get(kind, id)?
            .ok_or_else(|| DaycareError::transaction_not_found(id.to_string()))
    }

    /// All entries of a kind, newest first
    pub fn list(&self, kind: TransactionKind) -> DaycareResult<Vec<Transaction>> {
        self.storage.transactions().list(kind)
    }

    pub fn list_in_range(
        &self,
        kind: TransactionKind,
        range: &DateRange,
    ) -> DaycareResult<Vec<Transaction>> {
        self.storage.transactions().list_in_range(kind, range)
    }

    /// Replace every field of an existing entry
    pub fn update(
        &self,
        kind: TransactionKind,
        id: TransactionId,
        input: TransactionInput,
    ) -> DaycareResult<Transaction> {
        let before = self.get(kind, id)?;
        let input = input
            .normalized()
            .map_err(|e| DaycareError::Validation(e.to_string()))?;

        self.storage.transactions().update(kind, id, &input)?;
        let after = input.into_transaction(id, kind);

        self.storage.record_audit(|| {
            AuditEntry::updated(AuditSubject::transaction(&after), &before, &after)
        });
        info!(kind = %kind, id = id.get(), "transaction updated");

        Ok(after)
    }

    /// Delete an entry. Expenses take their attachments with them: files
    /// first, then the link rows, then the expense itself.
    pub fn delete(&self, kind: TransactionKind, id: TransactionId) -> DaycareResult<Transaction> {
        let txn = self.get(kind, id)?;

        if kind == TransactionKind::Expense {
            self.remove_attachments(id)?;
        }

        self.storage.transactions().delete(kind, id)?;
        self.storage
            .record_audit(|| AuditEntry::deleted(AuditSubject::transaction(&txn), &txn));
        info!(kind = %kind, id = id.get(), "transaction deleted");

        Ok(txn)
    }

    /// Copy `source` into managed storage and link it to an expense.
    ///
    /// The copy is made before the link row is written. If the insert fails
    /// the copied file is left behind.
    pub fn attach_file(
        &self,
        expense_id: TransactionId,
        source: &Path,
    ) -> DaycareResult<ExpenseAttachment> {
        self.get(TransactionKind::Expense, expense_id)?;

        if !source.is_file() {
            return Err(DaycareError::Attachment(format!(
                "Not a readable file: {}",
                source.display()
            )));
        }
        let original_filename = original_file_name(source).ok_or_else(|| {
            DaycareError::Attachment(format!("No file name in {}", source.display()))
        })?;

        let dir = self.storage.attachments_dir()?;
        fs::create_dir_all(&dir).map_err(|e| {
            DaycareError::Attachment(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        let stored_path = dir.join(managed_file_name(expense_id, &original_filename));

        fs::copy(source, &stored_path).map_err(|e| {
            DaycareError::Attachment(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                stored_path.display(),
                e
            ))
        })?;

        let id = self
            .storage
            .attachments()
            .insert(expense_id, &stored_path, &original_filename)?;
        let attachment = ExpenseAttachment {
            id,
            expense_id,
            stored_path,
            original_filename,
        };

        self.storage.record_audit(|| {
            AuditEntry::created(AuditSubject::attachment(&attachment), &attachment)
        });
        info!(expense = expense_id.get(), file = %attachment.original_filename, "file attached");

        Ok(attachment)
    }

    /// Files attached to an expense
    pub fn attachments(&self, expense_id: TransactionId) -> DaycareResult<Vec<ExpenseAttachment>> {
        self.storage.attachments().list_for_expense(expense_id)
    }

    fn remove_attachments(&self, expense_id: TransactionId) -> DaycareResult<()> {
        let attachments = self.attachments(expense_id)?;

        for attachment in &attachments {
            match fs::remove_file(&attachment.stored_path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(path = %attachment.stored_path.display(), "attachment already missing");
                }
                Err(e) => {
                    return Err(DaycareError::Attachment(format!(
                        "Failed to remove {}: {}",
                        attachment.stored_path.display(),
                        e
                    )))
                }
            }
        }

        self.storage.attachments().delete_for_expense(expense_id)?;

        for attachment in &attachments {
            self.storage.record_audit(|| {
                AuditEntry::deleted(AuditSubject::attachment(attachment), attachment)
            });
        }

        Ok(())
    }
}
