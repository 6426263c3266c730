//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{DaycareError, DaycareResult};
use crate::models::TransactionKind;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories (both kinds unless one is given)
    List {
        /// income or expense
        kind: Option<String>,
    },
    /// Add a category
    Add {
        /// income or expense
        kind: String,
        /// Category name
        name: String,
    },
    /// Remove a category; existing entries keep their label
    Remove {
        /// income or expense
        kind: String,
        /// Category name
        name: String,
    },
}

fn parse_kind(s: &str) -> DaycareResult<TransactionKind> {
    s.parse().map_err(DaycareError::Validation)
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> DaycareResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let kinds = match kind {
                Some(kind) => vec![parse_kind(&kind)?],
                None => TransactionKind::all().to_vec(),
            };
            for (i, kind) in kinds.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", format_category_list(kind, &service.list(kind)?));
            }
        }

        CategoryCommands::Add { kind, name } => {
            let kind = parse_kind(&kind)?;
            let category = service.add(kind, &name)?;
            println!("Added {} category: {}", kind.to_string().to_lowercase(), category.name);
        }

        CategoryCommands::Remove { kind, name } => {
            let kind = parse_kind(&kind)?;
            let category = service.remove(kind, &name)?;
            println!(
                "Removed {} category: {}",
                kind.to_string().to_lowercase(),
                category.name
            );
        }
    }

    Ok(())
}
