//! Storage layer for the daycare ledger
//!
//! A single SQLite database holds every table. `Storage` owns the
//! connection and hands out short-lived repositories that borrow it.
//! Statements auto-commit; there are no explicit transactions.

pub mod attachments;
pub mod attendance;
pub mod categories;
pub mod profiles;
pub mod schema;
pub mod traits;
pub mod transactions;
pub mod users;

pub use attachments::AttachmentRepository;
pub use attendance::AttendanceRepository;
pub use categories::CategoryRepository;
pub use profiles::{ProfileDocument, ProfileRepository};
pub use traits::{AttendanceStore, LedgerStore};
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use std::path::PathBuf;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::DaycarePaths;
use crate::error::{DaycareError, DaycareResult};
use crate::models::{ChildProfile, EmployeeProfile};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: Connection,
    paths: Option<DaycarePaths>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open (creating if needed) the database under `paths`
    pub fn open(paths: DaycarePaths) -> DaycareResult<Self> {
        paths.ensure_directories()?;

        let db_file = paths.database_file();
        debug!(path = %db_file.display(), "opening database");
        let conn = Connection::open(&db_file).map_err(|e| {
            DaycareError::Storage(format!("Failed to open {}: {}", db_file.display(), e))
        })?;
        schema::initialize(&conn)?;

        Ok(Self {
            conn,
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths: Some(paths),
        })
    }

    /// A throwaway database with no files on disk and no audit log
    pub fn open_in_memory() -> DaycareResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self {
            conn,
            paths: None,
            audit: None,
        })
    }

    pub fn paths(&self) -> Option<&DaycarePaths> {
        self.paths.as_ref()
    }

    /// Directory managed attachment copies are written to
    pub fn attachments_dir(&self) -> DaycareResult<PathBuf> {
        self.paths
            .as_ref()
            .map(DaycarePaths::attachments_dir)
            .ok_or_else(|| {
                DaycareError::Attachment("In-memory storage cannot hold attachments".into())
            })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.conn)
    }

    pub fn attendance(&self) -> AttendanceRepository<'_> {
        AttendanceRepository::new(&self.conn)
    }

    pub fn children(&self) -> ProfileRepository<'_, ChildProfile> {
        ProfileRepository::new(&self.conn)
    }

    pub fn employees(&self) -> ProfileRepository<'_, EmployeeProfile> {
        ProfileRepository::new(&self.conn)
    }

    pub fn attachments(&self) -> AttachmentRepository<'_> {
        AttachmentRepository::new(&self.conn)
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.conn)
    }

    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append to the audit log after a successful write
    ///
    /// A failed append is logged and swallowed; the caller's change has
    /// already been committed.
    pub fn record_audit(&self, entry: impl FnOnce() -> AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        let entry = entry();
        if let Err(e) = logger.log(&entry) {
            warn!(
                error = %e,
                operation = %entry.operation,
                subject = %entry.subject,
                "audit entry not written"
            );
        }
    }
}
