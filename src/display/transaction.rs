//! Transaction display formatting
//!
//! Formats income and expense entries for list and detail views.

use tabled::Tabled;

use crate::models::{ExpenseAttachment, Money, Transaction, DATE_FORMAT};

use super::{or_dash, render_table, truncate};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// Format a list of transactions as a table with a total line
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id.to_string(),
            date: txn.date.format(DATE_FORMAT).to_string(),
            category: truncate(&txn.category, 24),
            amount: txn.amount.to_string(),
            notes: truncate(&txn.notes, 30),
        })
        .collect();

    let total = Money::checked_sum(transactions.iter().map(|t| t.amount))
        .map_or_else(|| "out of range".to_string(), |total| total.to_string());

    let mut output = render_table(rows);
    output.push_str(&format!(
        "\n{} entries, total {}\n",
        transactions.len(),
        total
    ));
    output
}

/// Format transaction details, listing attachments for expenses
pub fn format_transaction_details(txn: &Transaction, attachments: &[ExpenseAttachment]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", txn.kind, txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(DATE_FORMAT)));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Notes:       {}\n", or_dash(&txn.notes)));

    if !attachments.is_empty() {
        output.push_str("\nAttachments:\n");
        for attachment in attachments {
            output.push_str(&format!("  {}\n", attachment.original_filename));
        }
    }

    output
}

#[derive(Tabled)]
struct AttachmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Stored At")]
    stored_at: String,
}

pub fn format_attachment_list(attachments: &[ExpenseAttachment]) -> String {
    if attachments.is_empty() {
        return "No files attached.\n".to_string();
    }

    let rows = attachments
        .iter()
        .map(|a| AttachmentRow {
            id: a.id.to_string(),
            file: a.original_filename.clone(),
            stored_at: a.stored_path.display().to_string(),
        })
        .collect();

    let mut output = render_table(rows);
    output.push('\n');
    output
}
