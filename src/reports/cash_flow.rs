//! Cash Flow Report
//!
//! Every income entry counts as cash in and every expense as cash out.

use std::io::Write;

use crate::error::DaycareResult;
use crate::models::{DateRange, Money};
use crate::storage::LedgerStore;

use super::{write_csv_header, write_csv_row, Totals};

#[derive(Debug, Clone)]
pub struct CashFlowReport {
    pub range: DateRange,
    pub totals: Totals,
}

impl CashFlowReport {
    pub fn generate<L: LedgerStore + ?Sized>(ledger: &L, range: DateRange) -> DaycareResult<Self> {
        let totals = Totals::collect(ledger, &range)?;
        tracing::debug!(%range, net = %totals.net(), "cash flow generated");
        Ok(Self { range, totals })
    }

    pub fn inflows(&self) -> Money {
        self.totals.income
    }

    pub fn outflows(&self) -> Money {
        self.totals.expense
    }

    pub fn net_cash_flow(&self) -> Money {
        self.totals.net()
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Cash Flow: {}\n", self.range));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Cash Inflows:    {:>15}\n", self.inflows()));
        output.push_str(&format!("Cash Outflows:   {:>15}\n", self.outflows()));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("Net Cash Flow:   {:>15}\n", self.net_cash_flow()));

        output
    }

    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DaycareResult<()> {
        write_csv_header(writer)?;
        write_csv_row(writer, &self.range, "Cash Inflows", self.inflows())?;
        write_csv_row(writer, &self.range, "Cash Outflows", self.outflows())?;
        write_csv_row(writer, &self.range, "Net Cash Flow", self.net_cash_flow())?;
        Ok(())
    }
}
