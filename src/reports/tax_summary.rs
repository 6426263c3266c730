//! Tax Summary Report
//!
//! Income, expenses and taxable income for a tax year, either as four
//! calendar quarters or as one annual window.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{DaycareError, DaycareResult};
use crate::models::{DateRange, Money};
use crate::storage::LedgerStore;

use super::{out_of_range, write_csv_header, write_csv_row, Totals};

/// How the tax year is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaxPeriod {
    #[default]
    Quarterly,
    Annual,
}

impl fmt::Display for TaxPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxPeriod::Quarterly => write!(f, "Quarterly"),
            TaxPeriod::Annual => write!(f, "Annual"),
        }
    }
}

impl FromStr for TaxPeriod {
    type Err = DaycareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quarterly" | "q" => Ok(TaxPeriod::Quarterly),
            "annual" | "annually" | "a" => Ok(TaxPeriod::Annual),
            other => Err(DaycareError::Validation(format!(
                "Unknown tax period '{}', expected quarterly or annual",
                other
            ))),
        }
    }
}

/// One reporting window of the tax year
#[derive(Debug, Clone)]
pub struct TaxWindow {
    /// "Q1".."Q4" or the year
    pub label: String,
    pub range: DateRange,
    pub totals: Totals,
}

impl TaxWindow {
    pub fn taxable_income(&self) -> Money {
        self.totals.net()
    }
}

#[derive(Debug, Clone)]
pub struct TaxSummaryReport {
    pub year: i32,
    pub period: TaxPeriod,
    pub windows: Vec<TaxWindow>,
    total_taxable_income: Money,
}

impl TaxSummaryReport {
    pub fn generate<L: LedgerStore + ?Sized>(
        ledger: &L,
        year: i32,
        period: TaxPeriod,
    ) -> DaycareResult<Self> {
        let ranges = match period {
            TaxPeriod::Quarterly => (1..=4)
                .map(|q| DateRange::quarter(year, q).map(|range| (format!("Q{}", q), range)))
                .collect::<Result<Vec<_>, _>>(),
            TaxPeriod::Annual => DateRange::year(year).map(|r| vec![(year.to_string(), r)]),
        }
        .map_err(|e| DaycareError::Validation(e.to_string()))?;

        let mut windows = Vec::with_capacity(ranges.len());
        for (label, range) in ranges {
            let totals = Totals::collect(ledger, &range)?;
            windows.push(TaxWindow { label, range, totals });
        }

        let total_taxable_income = Money::checked_sum(windows.iter().map(TaxWindow::taxable_income))
            .ok_or_else(|| out_of_range(&format!("Taxable income for {}", year)))?;

        tracing::debug!(year, %period, windows = windows.len(), "tax summary generated");
        Ok(Self {
            year,
            period,
            windows,
            total_taxable_income,
        })
    }

    /// Sum of taxable income over every window
    pub fn total_taxable_income(&self) -> Money {
        self.total_taxable_income
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Tax Summary {} ({})\n", self.year, self.period));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:<24} {:>12} {:>12} {:>12}\n",
            "Period", "Dates", "Income", "Expenses", "Taxable"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for window in &self.windows {
            output.push_str(&format!(
                "{:<8} {:<24} {:>12} {:>12} {:>12}\n",
                window.label,
                window.range.to_string(),
                window.totals.income,
                window.totals.expense,
                window.taxable_income()
            ));
        }

        if self.windows.len() > 1 {
            output.push_str(&"-".repeat(70));
            output.push('\n');
            output.push_str(&format!(
                "{:<8} {:<24} {:>12} {:>12} {:>12}\n",
                "Total",
                "",
                "",
                "",
                self.total_taxable_income()
            ));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DaycareResult<()> {
        write_csv_header(writer)?;
        for window in &self.windows {
            write_csv_row(
                writer,
                &window.range,
                &format!("{} Income", window.label),
                window.totals.income,
            )?;
            write_csv_row(
                writer,
                &window.range,
                &format!("{} Expenses", window.label),
                window.totals.expense,
            )?;
            write_csv_row(
                writer,
                &window.range,
                &format!("{} Taxable Income", window.label),
                window.taxable_income(),
            )?;
        }
        Ok(())
    }
}
