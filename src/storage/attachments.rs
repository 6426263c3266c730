//! Expense attachment links

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Row};

use crate::error::DaycareResult;
use crate::models::{AttachmentId, ExpenseAttachment, TransactionId};

pub struct AttachmentRepository<'a> {
    conn: &'a Connection,
}

impl<'a> AttachmentRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(
        &self,
        expense_id: TransactionId,
        stored_path: &Path,
        original_filename: &str,
    ) -> DaycareResult<AttachmentId> {
        self.conn.execute(
            "INSERT INTO expense_files (expense_id, file_path, file_name) VALUES (?1, ?2, ?3)",
            params![expense_id, stored_path.to_string_lossy().into_owned(), original_filename],
        )?;
        Ok(AttachmentId::new(self.conn.last_insert_rowid()))
    }

    pub fn list_for_expense(&self, expense_id: TransactionId) -> DaycareResult<Vec<ExpenseAttachment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, expense_id, file_path, file_name FROM expense_files \
             WHERE expense_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![expense_id], from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Remove every link row for an expense, returning how many were removed
    pub fn delete_for_expense(&self, expense_id: TransactionId) -> DaycareResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM expense_files WHERE expense_id = ?1", params![expense_id])?)
    }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<ExpenseAttachment> {
    Ok(ExpenseAttachment {
        id: row.get(0)?,
        expense_id: row.get(1)?,
        stored_path: PathBuf::from(row.get::<_, String>(2)?),
        original_filename: row.get(3)?,
    })
}
