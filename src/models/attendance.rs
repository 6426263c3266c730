//! Attendance model
//!
//! One record per subject per calendar day. The displayed status is never
//! stored; it is derived from which of the two times are present.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::child::EnrollmentStatus;
use super::ids::{AttendanceId, SubjectId};

/// Time format for stored check-in and check-out values
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// The kind of person an attendance record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Child,
    Employee,
}

impl SubjectKind {
    /// Attendance table for this kind
    pub const fn attendance_table(&self) -> &'static str {
        match self {
            Self::Child => "child_attendance",
            Self::Employee => "employee_attendance",
        }
    }

    /// Column holding the subject id in the attendance table
    pub const fn subject_column(&self) -> &'static str {
        match self {
            Self::Child => "child_id",
            Self::Employee => "employee_id",
        }
    }

    /// Column holding the arrival time
    pub const fn in_column(&self) -> &'static str {
        match self {
            Self::Child => "check_in_time",
            Self::Employee => "clock_in_time",
        }
    }

    /// Column holding the departure time
    pub const fn out_column(&self) -> &'static str {
        match self {
            Self::Child => "check_out_time",
            Self::Employee => "clock_out_time",
        }
    }

    /// Past participle for arriving: "been checked" or "clocked"
    pub const fn arrival_verb(&self) -> &'static str {
        match self {
            Self::Child => "been checked",
            Self::Employee => "clocked",
        }
    }

    /// Table holding the subject profiles
    pub const fn profile_table(&self) -> &'static str {
        match self {
            Self::Child => "customers",
            Self::Employee => "employees",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Child => write!(f, "Child"),
            Self::Employee => write!(f, "Employee"),
        }
    }
}

/// A child or employee as seen by the attendance tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Enrollment status for children, `None` for employees
    pub enrollment: Option<EnrollmentStatus>,
}

impl Subject {
    /// Employees are always active; children only with the given status
    pub fn is_active(&self, active_status: EnrollmentStatus) -> bool {
        self.enrollment.map_or(true, |status| status == active_status)
    }
}

/// A subject's attendance for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub subject_kind: SubjectKind,
    pub subject_id: SubjectId,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::derive(Some(self))
    }
}

/// Derived attendance state for a subject on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Absent,
    CheckedIn,
    CheckedOut,
}

impl AttendanceStatus {
    /// Derive the status from the day's record, if any.
    ///
    /// A record with a check-out but no check-in counts as absent.
    pub fn derive(record: Option<&AttendanceRecord>) -> Self {
        match record {
            Some(r) => match (r.check_in, r.check_out) {
                (Some(_), Some(_)) => Self::CheckedOut,
                (Some(_), None) => Self::CheckedIn,
                (None, _) => Self::Absent,
            },
            None => Self::Absent,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Absent => "Absent",
            Self::CheckedIn => "Checked In",
            Self::CheckedOut => "Checked Out",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Drop sub-second precision so stored times round-trip exactly
pub fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse `HH:MM:SS`, or `HH:MM` with seconds taken as zero
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME_FORMAT).or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(check_in: Option<&str>, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId::new(1),
            subject_kind: SubjectKind::Child,
            subject_id: SubjectId::new(1),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_in: check_in.map(|t| parse_time(t).unwrap()),
            check_out: check_out.map(|t| parse_time(t).unwrap()),
        }
    }

    #[test]
    fn test_status_table() {
        assert_eq!(AttendanceStatus::derive(None), AttendanceStatus::Absent);
        assert_eq!(record(None, None).status(), AttendanceStatus::Absent);
        assert_eq!(
            record(Some("08:00:00"), None).status(),
            AttendanceStatus::CheckedIn
        );
        assert_eq!(
            record(Some("08:00:00"), Some("17:00:00")).status(),
            AttendanceStatus::CheckedOut
        );
        assert_eq!(
            record(None, Some("17:00:00")).status(),
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AttendanceStatus::CheckedIn.to_string(), "Checked In");
        assert_eq!(AttendanceStatus::CheckedOut.to_string(), "Checked Out");
        assert_eq!(AttendanceStatus::Absent.to_string(), "Absent");
    }

    #[test]
    fn test_kind_columns() {
        assert_eq!(SubjectKind::Child.attendance_table(), "child_attendance");
        assert_eq!(SubjectKind::Employee.in_column(), "clock_in_time");
        assert_eq!(SubjectKind::Employee.profile_table(), "employees");
    }

    #[test]
    fn test_subject_activity() {
        let employee = Subject {
            id: SubjectId::new(1),
            name: "Sam".into(),
            enrollment: None,
        };
        let withdrawn = Subject {
            id: SubjectId::new(2),
            name: "Ada".into(),
            enrollment: Some(EnrollmentStatus::Withdrawn),
        };
        assert!(employee.is_active(EnrollmentStatus::Enrolled));
        assert!(!withdrawn.is_active(EnrollmentStatus::Enrolled));
        assert!(withdrawn.is_active(EnrollmentStatus::Withdrawn));
    }

    #[test]
    fn test_whole_seconds() {
        let t = NaiveTime::from_hms_milli_opt(8, 30, 15, 750).unwrap();
        assert_eq!(format_time(whole_seconds(t)), "08:30:15");
        assert_eq!(whole_seconds(t), NaiveTime::from_hms_opt(8, 30, 15).unwrap());
    }

    #[test]
    fn test_parse_time_accepts_minutes_only() {
        assert_eq!(
            parse_time("07:45").unwrap(),
            NaiveTime::from_hms_opt(7, 45, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
    }
}
