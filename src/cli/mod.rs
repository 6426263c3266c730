//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod attendance;
pub mod auth;
pub mod category;
pub mod people;
pub mod report;
pub mod transaction;

pub use attendance::{handle_attendance_command, AttendanceCommands};
pub use auth::{handle_login, LoginArgs};
pub use category::{handle_category_command, CategoryCommands};
pub use people::{handle_child_command, handle_employee_command, ChildCommands, EmployeeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{
    handle_expense_command, handle_income_command, ExpenseCommands, LedgerCommands,
};

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{DaycareError, DaycareResult};
use crate::models::{parse_date, Money};

pub(crate) fn parse_amount(s: &str) -> DaycareResult<Money> {
    Money::parse(s).map_err(|e| DaycareError::Validation(format!("Invalid amount: {}", e)))
}

pub(crate) fn parse_date_arg(s: &str) -> DaycareResult<NaiveDate> {
    parse_date(s).map_err(|e| DaycareError::Validation(e.to_string()))
}

/// Parse an ID given with or without its prefix (`txn-4` or `4`)
pub(crate) fn parse_id<T: FromStr>(s: &str, what: &str) -> DaycareResult<T> {
    s.parse()
        .map_err(|_| DaycareError::Validation(format!("Invalid {} ID: {}", what, s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChildId;

    #[test]
    fn test_parse_id_accepts_prefix() {
        let a: ChildId = parse_id("chd-12", "child").unwrap();
        let b: ChildId = parse_id("12", "child").unwrap();
        assert_eq!(a, b);
        assert!(parse_id::<ChildId>("abc", "child").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,250.75").unwrap(), Money::from_cents(125_075));
        assert!(parse_amount("ten").unwrap_err().is_validation());
    }
}
