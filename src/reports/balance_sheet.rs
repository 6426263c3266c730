//! Balance Sheet Report
//!
//! A simplified position as of a date: everything recorded from
//! 1900-01-01 through the as-of date. Cumulative income is reported as
//! assets, cumulative expenses as liabilities, and equity is their
//! difference. No real asset or liability accounts are tracked.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::DaycareResult;
use crate::models::{DateRange, Money, DATE_FORMAT};
use crate::storage::LedgerStore;

use super::{write_csv_header, write_csv_row, Totals};

#[derive(Debug, Clone)]
pub struct BalanceSheetReport {
    pub as_of: NaiveDate,
    pub range: DateRange,
    pub totals: Totals,
}

impl BalanceSheetReport {
    pub fn generate<L: LedgerStore + ?Sized>(ledger: &L, as_of: NaiveDate) -> DaycareResult<Self> {
        let range = DateRange::through(as_of);
        let totals = Totals::collect(ledger, &range)?;
        tracing::debug!(%as_of, equity = %totals.net(), "balance sheet generated");
        Ok(Self { as_of, range, totals })
    }

    pub fn assets(&self) -> Money {
        self.totals.income
    }

    pub fn liabilities(&self) -> Money {
        self.totals.expense
    }

    pub fn equity(&self) -> Money {
        self.totals.net()
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Balance Sheet as of {}\n",
            self.as_of.format(DATE_FORMAT)
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Total Assets:      {:>15}\n", self.assets()));
        output.push_str(&format!("Total Liabilities: {:>15}\n", self.liabilities()));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("Equity:            {:>15}\n", self.equity()));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DaycareResult<()> {
        write_csv_header(writer)?;
        write_csv_row(writer, &self.range, "Total Assets", self.assets())?;
        write_csv_row(writer, &self.range, "Total Liabilities", self.liabilities())?;
        write_csv_row(writer, &self.range, "Equity", self.equity())?;
        Ok(())
    }
}
