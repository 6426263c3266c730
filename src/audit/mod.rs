//! Audit trail
//!
//! Ledger, profile, category and attendance changes are appended to
//! `audit.log` as one JSON line each. Writing the log is best-effort: the
//! database row is the record of truth.
//!
//! - `AuditEntry`: one operation on one `AuditSubject`.
//! - `AuditLogger`: appends entries and reads them back.
//! - `summarize_changes`: dotted-path change summary for updates.

mod diff;
mod entry;
mod logger;

pub use diff::{changed_paths, summarize_changes};
pub use entry::{AuditEntry, AuditSubject, Operation};
pub use logger::AuditLogger;
