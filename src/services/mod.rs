//! Service layer for the daycare ledger
//!
//! Services sit on top of the storage layer and own validation, audit
//! logging and the cross-table rules (attachment cleanup, the attendance
//! protocol).

pub mod attendance;
pub mod auth;
pub mod category;
pub mod import;
pub mod ledger;
pub mod roster;

pub use attendance::{AttendanceTracker, RosterEntry};
pub use auth::AuthService;
pub use category::CategoryService;
pub use import::{ImportResult, ImportService};
pub use ledger::LedgerService;
pub use roster::{ChildService, EmployeeService, RosterService};
