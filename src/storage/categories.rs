//! Category list repository

use rusqlite::{params, Connection, Row};

use crate::error::{DaycareError, DaycareResult};
use crate::models::{Category, CategoryId, TransactionKind};

pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Categories of one kind in the order they were added
    pub fn list(&self, kind: TransactionKind) -> DaycareResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type, category FROM categories WHERE type = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![kind.table()], from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, kind: TransactionKind, name: &str) -> DaycareResult<Option<Category>> {
        Ok(self.list(kind)?.into_iter().find(|c| c.matches_name(name)))
    }

    pub fn insert(&self, kind: TransactionKind, name: &str) -> DaycareResult<CategoryId> {
        self.conn.execute(
            "INSERT INTO categories (type, category) VALUES (?1, ?2)",
            params![kind.table(), name],
        )?;
        Ok(CategoryId::new(self.conn.last_insert_rowid()))
    }

    pub fn delete(&self, id: CategoryId) -> DaycareResult<bool> {
        Ok(self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1", params![id])?
            > 0)
    }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    let raw_kind: String = row.get(1)?;
    let kind = raw_kind.parse::<TransactionKind>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(DaycareError::Storage(e)),
        )
    })?;

    Ok(Category {
        id: row.get(0)?,
        kind,
        name: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn test_seeded_lists_keep_order() {
        let storage = Storage::open_in_memory().unwrap();
        let income = storage.categories().list(TransactionKind::Income).unwrap();
        let names: Vec<_> = income.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Service Income", "Interest Income"]);
    }

    #[test]
    fn test_find_insert_delete() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.categories();

        assert!(repo
            .find_by_name(TransactionKind::Expense, "utilities")
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_name(TransactionKind::Income, "Utilities")
            .unwrap()
            .is_none());

        let id = repo.insert(TransactionKind::Income, "Registration Fees").unwrap();
        assert_eq!(repo.list(TransactionKind::Income).unwrap().len(), 4);
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.list(TransactionKind::Income).unwrap().len(), 3);
    }
}
