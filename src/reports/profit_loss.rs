//! Profit and Loss Report
//!
//! Income less expenses over a closed date range.

use std::io::Write;

use crate::error::DaycareResult;
use crate::models::{DateRange, Money};
use crate::storage::LedgerStore;

use super::{write_csv_header, write_csv_row, Totals};

/// Profit and loss over a date range
#[derive(Debug, Clone)]
pub struct ProfitLossReport {
    pub range: DateRange,
    pub totals: Totals,
}

impl ProfitLossReport {
    pub fn generate<L: LedgerStore + ?Sized>(ledger: &L, range: DateRange) -> DaycareResult<Self> {
        let totals = Totals::collect(ledger, &range)?;
        tracing::debug!(%range, net = %totals.net(), "profit and loss generated");
        Ok(Self { range, totals })
    }

    pub fn total_income(&self) -> Money {
        self.totals.income
    }

    pub fn total_expenses(&self) -> Money {
        self.totals.expense
    }

    /// Income minus expenses; negative for a loss
    pub fn net_profit(&self) -> Money {
        self.totals.net()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Profit and Loss: {}\n", self.range));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Total Income:    {:>15}\n", self.total_income()));
        output.push_str(&format!("Total Expenses:  {:>15}\n", self.total_expenses()));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        let label = if self.net_profit().is_negative() {
            "Net Loss:"
        } else {
            "Net Profit:"
        };
        output.push_str(&format!("{:<17}{:>15}\n", label, self.net_profit()));

        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DaycareResult<()> {
        write_csv_header(writer)?;
        write_csv_row(writer, &self.range, "Total Income", self.total_income())?;
        write_csv_row(writer, &self.range, "Total Expenses", self.total_expenses())?;
        write_csv_row(writer, &self.range, "Net Profit", self.net_profit())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionInput, TransactionKind};
    use crate::reports::testing::{date, FakeLedger};
    use crate::services::LedgerService;
    use crate::storage::Storage;

    #[test]
    fn test_net_over_closed_range() {
        let ledger = FakeLedger::default()
            .with(TransactionKind::Income, date(2024, 1, 1), 100_000)
            .with(TransactionKind::Income, date(2024, 1, 31), 50_000)
            .with(TransactionKind::Income, date(2024, 2, 1), 99_999)
            .with(TransactionKind::Expense, date(2024, 1, 15), 30_000);

        let report =
            ProfitLossReport::generate(&ledger, DateRange::new(date(2024, 1, 1), date(2024, 1, 31)))
                .unwrap();

        assert_eq!(report.total_income(), Money::from_cents(150_000));
        assert_eq!(report.total_expenses(), Money::from_cents(30_000));
        assert_eq!(report.net_profit(), Money::from_cents(120_000));
    }

    #[test]
    fn test_empty_range_is_zero() {
        let report = ProfitLossReport::generate(
            &FakeLedger::default(),
            DateRange::single_day(date(2024, 6, 1)),
        )
        .unwrap();

        assert!(report.net_profit().is_zero());
        assert!(report.format_terminal().contains("Net Profit:"));
        assert!(report.format_terminal().contains("$0.00"));
    }

    #[test]
    fn test_loss_against_sqlite() {
        let storage = Storage::open_in_memory().unwrap();
        let service = LedgerService::new(&storage);
        let day = date(2024, 3, 10);
        service
            .create(
                TransactionKind::Income,
                TransactionInput::new(Money::from_cents(10_000), "Sales", day),
            )
            .unwrap();
        service
            .create(
                TransactionKind::Expense,
                TransactionInput::new(Money::from_cents(12_550), "Supplies", day),
            )
            .unwrap();

        let report = ProfitLossReport::generate(&storage, DateRange::single_day(day)).unwrap();
        assert_eq!(report.net_profit(), Money::from_cents(-2_550));
        assert!(report.format_terminal().contains("Net Loss:"));
        assert!(report.format_terminal().contains("-$25.50"));
    }

    #[test]
    fn test_export_csv() {
        let ledger = FakeLedger::default().with(TransactionKind::Income, date(2024, 1, 2), 1_050);
        let report =
            ProfitLossReport::generate(&ledger, DateRange::new(date(2024, 1, 1), date(2024, 1, 31)))
                .unwrap();

        let mut csv = Vec::new();
        report.export_csv(&mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Start Date,End Date,Line,Amount");
        assert_eq!(lines[1], "2024-01-01,2024-01-31,Total Income,10.50");
        assert_eq!(lines[3], "2024-01-01,2024-01-31,Net Profit,10.50");
    }
}
