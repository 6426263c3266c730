//! Storage seams for the attendance tracker and the report aggregator
//!
//! The services are generic over these traits so they can run against the
//! SQLite [`Storage`] or an in-memory fake.

use chrono::{NaiveDate, NaiveTime};

use crate::audit::{AuditEntry, AuditSubject, Operation};
use crate::error::DaycareResult;
use crate::models::{
    AttendanceRecord, ChildProfile, DateRange, EmployeeProfile, Money, Subject, SubjectId,
    SubjectKind, TransactionKind,
};

use super::Storage;

/// Attendance persistence
pub trait AttendanceStore {
    /// The record for `subject` on `date`, if one exists
    fn find_attendance(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
    ) -> DaycareResult<Option<AttendanceRecord>>;

    /// Create a record with the given check-in and no check-out
    fn insert_attendance(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
        check_in: NaiveTime,
    ) -> DaycareResult<AttendanceRecord>;

    /// Persist both times of an existing record
    fn update_attendance(&self, before: &AttendanceRecord, after: &AttendanceRecord)
        -> DaycareResult<()>;

    /// Every child or employee, whatever their enrollment status
    fn subjects(&self, kind: SubjectKind) -> DaycareResult<Vec<Subject>>;
}

/// Read-only aggregation over the income and expense tables
pub trait LedgerStore {
    /// Sum of amounts of `kind` dated within `range`; zero when nothing matches
    fn sum_amount(&self, kind: TransactionKind, range: &DateRange) -> DaycareResult<Money>;
}

impl AttendanceStore for Storage {
    fn find_attendance(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
    ) -> DaycareResult<Option<AttendanceRecord>> {
        self.attendance().find(kind, subject, date)
    }

    fn insert_attendance(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
        check_in: NaiveTime,
    ) -> DaycareResult<AttendanceRecord> {
        let id = self
            .attendance()
            .insert(kind, subject, date, Some(check_in), None)?;
        let record = AttendanceRecord {
            id,
            subject_kind: kind,
            subject_id: subject,
            date,
            check_in: Some(check_in),
            check_out: None,
        };

        self.record_audit(|| AuditEntry::attendance(Operation::CheckIn, &record));
        Ok(record)
    }

    fn update_attendance(
        &self,
        before: &AttendanceRecord,
        after: &AttendanceRecord,
    ) -> DaycareResult<()> {
        self.attendance().update_times(after)?;
        self.record_audit(|| {
            if before.check_out.is_none() && after.check_out.is_some() {
                AuditEntry::attendance(Operation::CheckOut, after)
            } else {
                let subject = AuditSubject::attendance(after, after.check_in);
                AuditEntry::updated(subject, before, after)
            }
        });
        Ok(())
    }

    fn subjects(&self, kind: SubjectKind) -> DaycareResult<Vec<Subject>> {
        let subjects = match kind {
            SubjectKind::Child => self
                .children()
                .list()?
                .into_iter()
                .map(|(id, profile): (_, ChildProfile)| Subject {
                    id: id.into(),
                    name: profile.full_name,
                    enrollment: Some(profile.enrollment_status),
                })
                .collect(),
            SubjectKind::Employee => self
                .employees()
                .list()?
                .into_iter()
                .map(|(id, profile): (_, EmployeeProfile)| Subject {
                    id: id.into(),
                    name: profile.name,
                    enrollment: None,
                })
                .collect(),
        };
        Ok(subjects)
    }
}

impl LedgerStore for Storage {
    fn sum_amount(&self, kind: TransactionKind, range: &DateRange) -> DaycareResult<Money> {
        self.transactions().sum_amount(kind, range)
    }
}
