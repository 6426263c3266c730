//! Bulk CSV import
//!
//! Files need an `Amount, Type, Date, Comments` header (`Type` is the
//! category). The header is checked before any row is read. Each row is then
//! imported on its own: a bad row is reported and the rest still go in.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{DaycareError, DaycareResult};
use crate::models::period::parse_date;
use crate::models::{Money, TransactionId, TransactionInput, TransactionKind};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Columns every import file must have
pub const REQUIRED_COLUMNS: [&str; 4] = ["Amount", "Type", "Date", "Comments"];

/// Header positions of the required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    amount: usize,
    category: usize,
    date: usize,
    comments: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> DaycareResult<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        match (
            position("Amount"),
            position("Type"),
            position("Date"),
            position("Comments"),
        ) {
            (Some(amount), Some(category), Some(date), Some(comments)) => Ok(Self {
                amount,
                category,
                date,
                comments,
            }),
            _ => {
                let missing: Vec<&str> = REQUIRED_COLUMNS
                    .into_iter()
                    .filter(|name| position(*name).is_none())
                    .collect();
                Err(DaycareError::Validation(format!(
                    "Missing required columns: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Number of rows inserted
    pub imported: usize,
    /// `(row, message)` for every row that failed; rows count from 1
    /// after the header
    pub errors: Vec<(usize, String)>,
    /// Ids of inserted rows in file order
    pub imported_ids: Vec<TransactionId>,
}

impl ImportResult {
    pub fn summary(&self) -> String {
        format!("Success: {} / Errors: {}", self.imported, self.errors.len())
    }
}

/// Service for bulk transaction import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a CSV file from disk
    pub fn import_file(&self, kind: TransactionKind, path: &Path) -> DaycareResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            DaycareError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(kind, file)
    }

    /// Import CSV data from any reader
    pub fn import_from_reader<R: Read>(
        &self,
        kind: TransactionKind,
        reader: R,
    ) -> DaycareResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;
        let ledger = LedgerService::new(self.storage);
        let mut result = ImportResult::default();

        for (index, record) in reader.records().enumerate() {
            let row = index + 1;

            let outcome = record
                .map_err(|e| format!("Unreadable row: {}", e))
                .and_then(|record| parse_row(&record, &columns))
                .and_then(|input| ledger.create(kind, input).map_err(|e| e.to_string()));

            match outcome {
                Ok(txn) => {
                    result.imported += 1;
                    result.imported_ids.push(txn.id);
                }
                Err(message) => {
                    warn!(row, %message, "import row rejected");
                    result.errors.push((row, message));
                }
            }
        }

        info!(
            kind = %kind,
            imported = result.imported,
            errors = result.errors.len(),
            "import finished"
        );
        Ok(result)
    }
}

fn parse_row(record: &StringRecord, columns: &ColumnMap) -> Result<TransactionInput, String> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .map(str::trim)
            .ok_or_else(|| format!("Missing {} value", name))
    };

    let amount = Money::parse(field(columns.amount, "Amount")?).map_err(|e| e.to_string())?;
    let category = field(columns.category, "Type")?;
    let date = parse_date(field(columns.date, "Date")?).map_err(|e| e.to_string())?;
    let comments = record.get(columns.comments).unwrap_or("").trim();

    Ok(TransactionInput::new(amount, category, date).with_notes(comments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DaycarePaths;
    use crate::models::DateRange;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_import_collects_row_errors() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ImportService::new(&storage);

        let csv = "Amount,Type,Date,Comments\n\
                   100.00,Sales,2024-01-15,January tuition\n\
                   abc,Sales,2024-01-16,bad amount\n\
                   50.25,Service Income,2024-01-17,\n";

        let result = service
            .import_from_reader(TransactionKind::Income, csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, 2);
        assert_eq!(result.summary(), "Success: 2 / Errors: 1");

        let total = storage
            .transactions()
            .sum_amount(
                TransactionKind::Income,
                &DateRange::year(2024).unwrap(),
            )
            .unwrap();
        assert_eq!(total, Money::from_cents(15025));
    }

    #[test]
    fn test_missing_column_aborts_before_any_insert() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ImportService::new(&storage);

        let csv = "Amount,Type,Date\n100.00,Sales,2024-01-15\n";
        let err = service
            .import_from_reader(TransactionKind::Expense, csv.as_bytes())
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("Comments"));
        assert_eq!(storage.transactions().count(TransactionKind::Expense).unwrap(), 0);
    }

    #[test]
    fn test_columns_in_any_order_and_bad_values() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ImportService::new(&storage);

        let csv = "Date,Comments,Type,Amount\n\
                   2024-02-30,typo,Supplies,10\n\
                   2024-02-28,spelled out,Supplies,ten\n";

        let result = service
            .import_from_reader(TransactionKind::Expense, csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 0);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].0, 1);
        assert!(result.errors[0].1.contains("2024-02-30"));
        assert!(result.errors[1].1.contains("ten"));
    }

    #[test]
    fn test_quoted_amount_and_blank_category() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ImportService::new(&storage);

        let csv = "Date,Comments,Type,Amount\n\
                   2024-02-29,leap day,Supplies,\"1,000.50\"\n\
                   2024-03-01,no category,,5\n";

        let result = service
            .import_from_reader(TransactionKind::Expense, csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.errors, vec![(2, "Validation error: Category is required".to_string())]);

        let txn = storage
            .transactions()
            .get(TransactionKind::Expense, result.imported_ids[0])
            .unwrap()
            .unwrap();
        assert_eq!(txn.amount, Money::from_cents(100050));
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(txn.notes, "leap day");
    }

    #[test]
    fn test_unwritable_audit_log_still_counts_rows() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DaycarePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths.clone()).unwrap();
        std::fs::create_dir(paths.audit_log()).unwrap();

        let csv = "Amount,Type,Date,Comments\n100.00,Sales,2024-01-15,tuition\n";
        let result = ImportService::new(&storage)
            .import_from_reader(TransactionKind::Income, csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert!(result.errors.is_empty());
        assert_eq!(storage.transactions().count(TransactionKind::Income).unwrap(), 1);
    }

    #[test]
    fn test_amount_too_large_is_a_row_error() {
        let storage = Storage::open_in_memory().unwrap();
        let csv = "Amount,Type,Date,Comments\n\
                   79228162514264337593543950335,Sales,2024-01-15,\n\
                   1,Sales,2024-01-16,\n";

        let result = ImportService::new(&storage)
            .import_from_reader(TransactionKind::Income, csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].1.contains("out of range"));

        let total = storage
            .transactions()
            .sum_amount(TransactionKind::Income, &DateRange::year(2024).unwrap())
            .unwrap();
        assert_eq!(total, Money::from_cents(100));
    }
}
