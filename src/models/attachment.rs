//! Expense attachment model

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ids::{AttachmentId, TransactionId};

/// A file copied into managed storage and linked to an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseAttachment {
    pub id: AttachmentId,
    pub expense_id: TransactionId,
    /// Location of the managed copy
    pub stored_path: PathBuf,
    /// Basename of the file the user attached
    pub original_filename: String,
}

/// Managed filename for an attachment: the owning expense id plus the
/// original basename, so two expenses can attach files with the same name.
pub fn managed_file_name(expense_id: TransactionId, original_filename: &str) -> String {
    format!("{}_{}", expense_id.get(), original_filename)
}

/// Basename of `path`, if it has one
pub fn original_file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managed_file_name() {
        assert_eq!(
            managed_file_name(TransactionId::new(14), "receipt.pdf"),
            "14_receipt.pdf"
        );
    }

    #[test]
    fn test_original_file_name() {
        assert_eq!(
            original_file_name(Path::new("/tmp/scans/receipt.pdf")),
            Some("receipt.pdf".to_string())
        );
        assert_eq!(original_file_name(Path::new("/")), None);
    }
}
