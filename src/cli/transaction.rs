//! Income and expense CLI commands
//!
//! Both ledgers share the same subcommands; expenses additionally accept
//! file attachments.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::display::{format_attachment_list, format_transaction_details, format_transaction_list};
use crate::error::{DaycareError, DaycareResult};
use crate::models::{DateRange, TransactionId, TransactionInput, TransactionKind};
use crate::services::{ImportService, LedgerService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_arg, parse_id};

/// Subcommands shared by the income and expense ledgers
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record a new entry
    Add {
        /// Amount (e.g., "125.00" or "$1,250.75")
        amount: String,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List entries, newest first
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Show one entry
    Show {
        /// Entry ID
        id: String,
    },
    /// Edit an entry; omitted fields keep their value
    Edit {
        /// Entry ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// Import entries from a CSV file with columns Amount, Type, Date, Comments
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Attach a receipt or other file to an expense
    Attach {
        /// Expense ID
        id: String,
        /// File to copy into storage
        file: PathBuf,
    },

    /// List files attached to an expense
    Files {
        /// Expense ID
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(storage: &Storage, cmd: LedgerCommands) -> DaycareResult<()> {
    handle_ledger_command(storage, TransactionKind::Income, cmd)
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> DaycareResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        ExpenseCommands::Ledger(cmd) => handle_ledger_command(storage, TransactionKind::Expense, cmd)?,

        ExpenseCommands::Attach { id, file } => {
            let id: TransactionId = parse_id(&id, "expense")?;
            let attachment = service.attach_file(id, &file)?;
            println!("Attached {} to expense {}", attachment.original_filename, id);
            println!("  Stored at: {}", attachment.stored_path.display());
        }

        ExpenseCommands::Files { id } => {
            let id: TransactionId = parse_id(&id, "expense")?;
            service.get(TransactionKind::Expense, id)?;
            print!("{}", format_attachment_list(&service.attachments(id)?));
        }
    }

    Ok(())
}

fn handle_ledger_command(
    storage: &Storage,
    kind: TransactionKind,
    cmd: LedgerCommands,
) -> DaycareResult<()> {
    let service = LedgerService::new(storage);
    let label = kind.to_string().to_lowercase();

    match cmd {
        LedgerCommands::Add {
            amount,
            category,
            date,
            notes,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => Local::now().date_naive(),
            };

            let input = TransactionInput::new(amount, category, date)
                .with_notes(notes.unwrap_or_default());
            let txn = service.create(kind, input)?;

            println!("Recorded {} {}: {} ({})", label, txn.id, txn.amount, txn.category);
        }

        LedgerCommands::List { from, to } => {
            let transactions = match (from, to) {
                (Some(from), Some(to)) => {
                    let range = DateRange::new(parse_date_arg(&from)?, parse_date_arg(&to)?);
                    service.list_in_range(kind, &range)?
                }
                _ => service.list(kind)?,
            };
            print!("{}", format_transaction_list(&transactions));
        }

        LedgerCommands::Show { id } => {
            let id: TransactionId = parse_id(&id, &label)?;
            let txn = service.get(kind, id)?;
            let attachments = match kind {
                TransactionKind::Expense => service.attachments(id)?,
                TransactionKind::Income => Vec::new(),
            };
            print!("{}", format_transaction_details(&txn, &attachments));
        }

        LedgerCommands::Edit {
            id,
            amount,
            category,
            date,
            notes,
        } => {
            let id: TransactionId = parse_id(&id, &label)?;
            let current = service.get(kind, id)?;

            let input = TransactionInput {
                amount: match amount {
                    Some(a) => parse_amount(&a)?,
                    None => current.amount,
                },
                category: category.unwrap_or(current.category),
                date: match date {
                    Some(d) => parse_date_arg(&d)?,
                    None => current.date,
                },
                notes: notes.unwrap_or(current.notes),
            };

            let txn = service.update(kind, id, input)?;
            println!("Updated {} {}", label, txn.id);
        }

        LedgerCommands::Delete { id } => {
            let id: TransactionId = parse_id(&id, &label)?;
            let txn = service.delete(kind, id)?;
            println!("Deleted {} {}: {} ({})", label, txn.id, txn.amount, txn.category);
        }

        LedgerCommands::Import { file } => {
            if !file.exists() {
                return Err(DaycareError::Import(format!(
                    "File not found: {}",
                    file.display()
                )));
            }

            let result = ImportService::new(storage).import_file(kind, &file)?;
            println!("{}", result.summary());
            for (row, message) in &result.errors {
                println!("  Row {}: {}", row, message);
            }
        }
    }

    Ok(())
}
