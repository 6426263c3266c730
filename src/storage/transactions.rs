//! Income and expense tables
//!
//! Both kinds share one repository; the kind picks the table. Table names
//! come from `TransactionKind::table` and are never user input.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{DaycareError, DaycareResult};
use crate::models::{DateRange, Money, Transaction, TransactionId, TransactionInput, TransactionKind};

pub struct TransactionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TransactionRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, kind: TransactionKind, input: &TransactionInput) -> DaycareResult<TransactionId> {
        let sql = format!(
            "INSERT INTO {} (amount, type, date, comments) VALUES (?1, ?2, ?3, ?4)",
            kind.table()
        );
        self.conn.execute(
            &sql,
            params![input.amount, input.category, input.date, input.notes],
        )?;
        Ok(TransactionId::new(self.conn.last_insert_rowid()))
    }

    pub fn get(&self, kind: TransactionKind, id: TransactionId) -> DaycareResult<Option<Transaction>> {
        let sql = format!(
            "SELECT id, amount, type, date, comments FROM {} WHERE id = ?1",
            kind.table()
        );
        let txn = self
            .conn
            .query_row(&sql, params![id], |row| from_row(kind, row))
            .optional()?;
        Ok(txn)
    }

    /// All transactions of a kind, newest first
    pub fn list(&self, kind: TransactionKind) -> DaycareResult<Vec<Transaction>> {
        let sql = format!(
            "SELECT id, amount, type, date, comments FROM {} ORDER BY date DESC, id DESC",
            kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| from_row(kind, row))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Transactions dated within `range`, both ends included
    pub fn list_in_range(
        &self,
        kind: TransactionKind,
        range: &DateRange,
    ) -> DaycareResult<Vec<Transaction>> {
        let sql = format!(
            "SELECT id, amount, type, date, comments FROM {} \
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date DESC, id DESC",
            kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![range.start, range.end], |row| from_row(kind, row))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Replace every field of a row. Returns false if the row does not exist.
    pub fn update(
        &self,
        kind: TransactionKind,
        id: TransactionId,
        input: &TransactionInput,
    ) -> DaycareResult<bool> {
        let sql = format!(
            "UPDATE {} SET amount = ?1, type = ?2, date = ?3, comments = ?4 WHERE id = ?5",
            kind.table()
        );
        let changed = self.conn.execute(
            &sql,
            params![input.amount, input.category, input.date, input.notes, id],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(&self, kind: TransactionKind, id: TransactionId) -> DaycareResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());
        Ok(self.conn.execute(&sql, params![id])? > 0)
    }

    /// Sum of amounts dated within `range`. Zero when nothing matches.
    ///
    /// Amounts are added as decimals here rather than with SQL `SUM`, which
    /// would coerce them through floating point.
    pub fn sum_amount(&self, kind: TransactionKind, range: &DateRange) -> DaycareResult<Money> {
        debug!(table = kind.table(), %range, "summing amounts");
        let sql = format!(
            "SELECT amount FROM {} WHERE date BETWEEN ?1 AND ?2",
            kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let amounts = stmt.query_map(params![range.start, range.end], |row| row.get::<_, Money>(0))?;

        let mut total = Money::zero();
        for amount in amounts {
            total = total.checked_add(amount?).ok_or_else(|| {
                DaycareError::Storage(format!(
                    "Sum of {} amounts in {} is out of range",
                    kind.table(),
                    range
                ))
            })?;
        }
        Ok(total)
    }

    pub fn count(&self, kind: TransactionKind) -> DaycareResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = self.conn.query_row(&sql, [], |r| r.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

fn from_row(kind: TransactionKind, row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        kind,
        amount: row.get(1)?,
        category: row.get(2)?,
        date: row.get::<_, NaiveDate>(3)?,
        notes: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(cents: i64, day: NaiveDate) -> TransactionInput {
        TransactionInput::new(Money::from_cents(cents), "Sales", day)
    }

    #[test]
    fn test_insert_get_round_trip_keeps_precision() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.transactions();

        let amount = Money::parse("19.995").unwrap();
        let txn = TransactionInput::new(amount, "Supplies", date(2024, 3, 1)).with_notes("paper");
        let id = repo.insert(TransactionKind::Expense, &txn).unwrap();

        let stored = repo.get(TransactionKind::Expense, id).unwrap().unwrap();
        assert_eq!(stored.amount, amount);
        assert_eq!(stored.notes, "paper");
        assert!(repo.get(TransactionKind::Income, id).unwrap().is_none());
    }

    #[test]
    fn test_sum_amount_is_closed_range() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.transactions();
        repo.insert(TransactionKind::Income, &input(10000, date(2024, 1, 1))).unwrap();
        repo.insert(TransactionKind::Income, &input(5000, date(2024, 1, 31))).unwrap();
        repo.insert(TransactionKind::Income, &input(7000, date(2024, 2, 1))).unwrap();

        let january = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(
            repo.sum_amount(TransactionKind::Income, &january).unwrap(),
            Money::from_cents(15000)
        );
        assert_eq!(
            repo.sum_amount(TransactionKind::Expense, &january).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_sum_out_of_range_is_an_error() {
        let storage = Storage::open_in_memory().unwrap();
        for amount in ["79228162514264337593543950335", "1"] {
            storage
                .connection()
                .execute(
                    "INSERT INTO income (amount, type, date, comments) VALUES (?1, 'Sales', '2024-05-01', '')",
                    [amount],
                )
                .unwrap();
        }

        let err = storage
            .transactions()
            .sum_amount(TransactionKind::Income, &DateRange::single_day(date(2024, 5, 1)))
            .unwrap_err();
        assert!(matches!(err, DaycareError::Storage(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_sum_reads_legacy_real_amounts() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .connection()
            .execute(
                "INSERT INTO expense (amount, type, date, comments) VALUES (12.5, 'Rent', '2024-05-01', NULL)",
                [],
            )
            .unwrap();

        let repo = storage.transactions();
        let total = repo
            .sum_amount(TransactionKind::Expense, &DateRange::single_day(date(2024, 5, 1)))
            .unwrap();
        assert_eq!(total, Money::from_cents(1250));

        let listed = repo.list(TransactionKind::Expense).unwrap();
        assert_eq!(listed[0].notes, "");
    }

    #[test]
    fn test_list_newest_first_update_and_delete() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.transactions();
        let old = repo.insert(TransactionKind::Income, &input(100, date(2024, 1, 1))).unwrap();
        let new = repo.insert(TransactionKind::Income, &input(200, date(2024, 6, 1))).unwrap();

        let ids: Vec<_> = repo
            .list(TransactionKind::Income)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![new, old]);

        assert!(repo
            .update(TransactionKind::Income, old, &input(300, date(2024, 1, 2)))
            .unwrap());
        assert_eq!(
            repo.get(TransactionKind::Income, old).unwrap().unwrap().amount,
            Money::from_cents(300)
        );

        assert!(repo.delete(TransactionKind::Income, old).unwrap());
        assert!(!repo.delete(TransactionKind::Income, old).unwrap());
        assert_eq!(repo.count(TransactionKind::Income).unwrap(), 1);
    }
}
