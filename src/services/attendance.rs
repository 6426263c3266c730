//! Attendance tracker
//!
//! One protocol for children and employees. A check-in upserts the day's
//! record; a check-out only ever updates an existing one. Status is derived
//! on every query and never stored.

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::error::{DaycareError, DaycareResult};
use crate::models::attendance::whole_seconds;
use crate::models::{
    AttendanceRecord, AttendanceStatus, EnrollmentStatus, Subject, SubjectId, SubjectKind,
};
use crate::storage::AttendanceStore;

/// One line of the daily roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub subject: Subject,
    pub status: AttendanceStatus,
    pub record: Option<AttendanceRecord>,
}

/// Attendance operations for one kind of subject
pub struct AttendanceTracker<'a, S: AttendanceStore> {
    store: &'a S,
    kind: SubjectKind,
    active_status: EnrollmentStatus,
}

impl<'a, S: AttendanceStore> AttendanceTracker<'a, S> {
    pub fn new(store: &'a S, kind: SubjectKind) -> Self {
        Self {
            store,
            kind,
            active_status: EnrollmentStatus::default(),
        }
    }

    /// Children with this enrollment status appear on the roster
    pub fn with_active_status(mut self, status: EnrollmentStatus) -> Self {
        self.active_status = status;
        self
    }

    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    /// Check a subject in now
    pub fn check_in(&self, subject: SubjectId) -> DaycareResult<AttendanceRecord> {
        self.check_in_at(subject, Local::now().naive_local())
    }

    /// Check a subject in at `at`.
    ///
    /// Overwrites the check-in of an existing record for that day and leaves
    /// its check-out alone; otherwise creates the day's record.
    pub fn check_in_at(
        &self,
        subject: SubjectId,
        at: NaiveDateTime,
    ) -> DaycareResult<AttendanceRecord> {
        let date = at.date();
        let time = whole_seconds(at.time());

        match self.store.find_attendance(self.kind, subject, date)? {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.check_in = Some(time);
                self.store.update_attendance(&existing, &updated)?;
                info!(kind = %self.kind, subject = subject.get(), %date, %time, "check-in updated");
                Ok(updated)
            }
            None => {
                let record = self.store.insert_attendance(self.kind, subject, date, time)?;
                info!(kind = %self.kind, subject = subject.get(), %date, %time, "checked in");
                Ok(record)
            }
        }
    }

    /// Check a subject out now
    pub fn check_out(&self, subject: SubjectId) -> DaycareResult<AttendanceRecord> {
        self.check_out_at(subject, Local::now().naive_local())
    }

    /// Check a subject out at `at`.
    ///
    /// Fails with [`DaycareError::NotCheckedIn`] when there is no record for
    /// that day; nothing is written in that case.
    pub fn check_out_at(
        &self,
        subject: SubjectId,
        at: NaiveDateTime,
    ) -> DaycareResult<AttendanceRecord> {
        let date = at.date();
        let time = whole_seconds(at.time());

        let Some(existing) = self.store.find_attendance(self.kind, subject, date)? else {
            warn!(kind = %self.kind, subject = subject.get(), %date, "check-out without check-in");
            return Err(DaycareError::NotCheckedIn { kind: self.kind });
        };

        let mut updated = existing.clone();
        updated.check_out = Some(time);
        self.store.update_attendance(&existing, &updated)?;
        info!(kind = %self.kind, subject = subject.get(), %date, %time, "checked out");
        Ok(updated)
    }

    /// The day's record, if any
    pub fn record(
        &self,
        subject: SubjectId,
        date: NaiveDate,
    ) -> DaycareResult<Option<AttendanceRecord>> {
        self.store.find_attendance(self.kind, subject, date)
    }

    /// Derived status for a subject on a day
    pub fn status(&self, subject: SubjectId, date: NaiveDate) -> DaycareResult<AttendanceStatus> {
        let record = self.record(subject, date)?;
        Ok(AttendanceStatus::derive(record.as_ref()))
    }

    /// Every active subject with their status on `date`
    pub fn roster(&self, date: NaiveDate) -> DaycareResult<Vec<RosterEntry>> {
        let subjects = self.store.subjects(self.kind)?;
        debug!(kind = %self.kind, total = subjects.len(), %date, "building roster");

        subjects
            .into_iter()
            .filter(|s| s.is_active(self.active_status))
            .map(|subject| {
                let record = self.record(subject.id, date)?;
                Ok(RosterEntry {
                    status: AttendanceStatus::derive(record.as_ref()),
                    subject,
                    record,
                })
            })
            .collect()
    }

    /// Roster for the current local date
    pub fn roster_today(&self) -> DaycareResult<Vec<RosterEntry>> {
        self.roster(Local::now().date_naive())
    }
}
