//! Financial reports
//!
//! Every report is derived from two `sum_amount` calls (income and expense)
//! over a closed date range. Reports render to the terminal and export to
//! CSV.

pub mod balance_sheet;
pub mod cash_flow;
pub mod profit_loss;
pub mod tax_summary;

pub use balance_sheet::BalanceSheetReport;
pub use cash_flow::CashFlowReport;
pub use profit_loss::ProfitLossReport;
pub use tax_summary::{TaxPeriod, TaxSummaryReport, TaxWindow};

use std::io::Write;

use crate::error::{DaycareError, DaycareResult};
use crate::models::{DateRange, Money, TransactionKind, DATE_FORMAT};
use crate::storage::LedgerStore;

/// Income and expense totals over one range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    net: Money,
}

impl Totals {
    pub fn collect<L: LedgerStore + ?Sized>(ledger: &L, range: &DateRange) -> DaycareResult<Self> {
        let income = ledger.sum_amount(TransactionKind::Income, range)?;
        let expense = ledger.sum_amount(TransactionKind::Expense, range)?;
        let net = income
            .checked_sub(expense)
            .ok_or_else(|| out_of_range(&format!("Net income for {}", range)))?;

        Ok(Self {
            income,
            expense,
            net,
        })
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.net
    }
}

pub(crate) fn out_of_range(what: &str) -> DaycareError {
    DaycareError::Validation(format!("{} is out of range", what))
}

pub(crate) const CSV_HEADER: &str = "Start Date,End Date,Line,Amount";

pub(crate) fn write_csv_header<W: Write>(writer: &mut W) -> DaycareResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| DaycareError::Export(e.to_string()))
}

/// One line of a CSV export, amount rounded to cents
pub(crate) fn write_csv_row<W: Write>(
    writer: &mut W,
    range: &DateRange,
    line: &str,
    amount: Money,
) -> DaycareResult<()> {
    writeln!(
        writer,
        "{},{},{},{}",
        range.start.format(DATE_FORMAT),
        range.end.format(DATE_FORMAT),
        line,
        amount.rounded()
    )
    .map_err(|e| DaycareError::Export(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;

    use super::*;

    /// Ledger backed by a plain list of dated amounts
    #[derive(Default)]
    pub struct FakeLedger {
        pub entries: Vec<(TransactionKind, NaiveDate, Money)>,
    }

    impl FakeLedger {
        pub fn with(self, kind: TransactionKind, date: NaiveDate, cents: i64) -> Self {
            self.with_amount(kind, date, Money::from_cents(cents))
        }

        pub fn with_amount(mut self, kind: TransactionKind, date: NaiveDate, amount: Money) -> Self {
            self.entries.push((kind, date, amount));
            self
        }
    }

    impl LedgerStore for FakeLedger {
        fn sum_amount(&self, kind: TransactionKind, range: &DateRange) -> DaycareResult<Money> {
            let amounts = self
                .entries
                .iter()
                .filter(|(k, date, _)| *k == kind && range.contains(*date))
                .map(|(_, _, amount)| *amount);
            Money::checked_sum(amounts)
                .ok_or_else(|| DaycareError::Storage("sum out of range".into()))
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::testing::{date, FakeLedger};
    use super::*;

    #[test]
    fn test_net_out_of_range_is_an_error() {
        let ledger = FakeLedger::default()
            .with_amount(
                TransactionKind::Income,
                date(2024, 1, 2),
                Money::from_decimal(Decimal::MAX),
            )
            .with(TransactionKind::Expense, date(2024, 1, 3), -100);

        let err = Totals::collect(&ledger, &DateRange::year(2024).unwrap()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Net income for 2024-01-01"));
    }

    #[test]
    fn test_net_is_income_less_expense() {
        let ledger = FakeLedger::default()
            .with(TransactionKind::Income, date(2024, 1, 2), 10_000)
            .with(TransactionKind::Expense, date(2024, 1, 3), 12_500);

        let totals = Totals::collect(&ledger, &DateRange::year(2024).unwrap()).unwrap();
        assert_eq!(totals.net(), Money::from_cents(-2_500));
    }
}
