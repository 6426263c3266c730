//! Category display formatting

use crate::models::{Category, TransactionKind};

/// Format a kind's categories as a numbered list
pub fn format_category_list(kind: TransactionKind, categories: &[Category]) -> String {
    if categories.is_empty() {
        return format!("No {} categories.\n", kind.to_string().to_lowercase());
    }

    let mut output = format!("{} categories\n", kind);
    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!("  {:>2}. {}\n", i + 1, category.name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_numbered() {
        let categories = vec![
            Category {
                id: CategoryId::new(1),
                kind: TransactionKind::Income,
                name: "Sales".into(),
            },
            Category {
                id: CategoryId::new(2),
                kind: TransactionKind::Income,
                name: "Interest Income".into(),
            },
        ];
        let output = format_category_list(TransactionKind::Income, &categories);
        assert!(output.starts_with("Income categories\n"));
        assert!(output.contains("   2. Interest Income\n"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            format_category_list(TransactionKind::Expense, &[]),
            "No expense categories.\n"
        );
    }
}
