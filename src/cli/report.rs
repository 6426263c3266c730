//! Report CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use crate::error::{DaycareError, DaycareResult};
use crate::models::DateRange;
use crate::reports::{
    BalanceSheetReport, CashFlowReport, ProfitLossReport, TaxPeriod, TaxSummaryReport,
};
use crate::storage::Storage;

use super::parse_date_arg;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income less expenses over a period (default: the last month)
    #[command(name = "profit-loss", alias = "pnl")]
    ProfitLoss {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cumulative position as of a date (default: today)
    #[command(name = "balance-sheet")]
    BalanceSheet {
        /// As-of date (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cash in and out over a period (default: the last month)
    #[command(name = "cash-flow")]
    CashFlow {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Taxable income for a year, by quarter or for the whole year
    Tax {
        /// Tax year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// quarterly or annual
        #[arg(short, long, default_value = "quarterly")]
        period: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// `[from, to]`, each bound falling back to the trailing month
fn resolve_range(from: Option<String>, to: Option<String>, today: NaiveDate) -> DaycareResult<DateRange> {
    let default = DateRange::trailing_month(today);
    let start = from.map(|d| parse_date_arg(&d)).transpose()?.unwrap_or(default.start);
    let end = to.map(|d| parse_date_arg(&d)).transpose()?.unwrap_or(default.end);
    Ok(DateRange::new(start, end))
}

fn export<F>(path: &Path, write: F) -> DaycareResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> DaycareResult<()>,
{
    let file = File::create(path).map_err(|e| {
        DaycareError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| DaycareError::Export(e.to_string()))?;
    println!("Report exported to: {}", path.display());
    Ok(())
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> DaycareResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::ProfitLoss { from, to, output } => {
            let report = ProfitLossReport::generate(storage, resolve_range(from, to, today)?)?;
            print!("{}", report.format_terminal());
            if let Some(path) = output {
                export(&path, |w| report.export_csv(w))?;
            }
        }

        ReportCommands::BalanceSheet { as_of, output } => {
            let as_of = as_of.map(|d| parse_date_arg(&d)).transpose()?.unwrap_or(today);
            let report = BalanceSheetReport::generate(storage, as_of)?;
            print!("{}", report.format_terminal());
            if let Some(path) = output {
                export(&path, |w| report.export_csv(w))?;
            }
        }

        ReportCommands::CashFlow { from, to, output } => {
            let report = CashFlowReport::generate(storage, resolve_range(from, to, today)?)?;
            print!("{}", report.format_terminal());
            if let Some(path) = output {
                export(&path, |w| report.export_csv(w))?;
            }
        }

        ReportCommands::Tax {
            year,
            period,
            output,
        } => {
            let period: TaxPeriod = period.parse()?;
            let report = TaxSummaryReport::generate(storage, year.unwrap_or(today.year()), period)?;
            print!("{}", report.format_terminal());
            if let Some(path) = output {
                export(&path, |w| report.export_csv(w))?;
            }
        }
    }

    Ok(())
}
