//! Attendance display formatting

use chrono::NaiveDate;
use tabled::Tabled;

use crate::models::attendance::format_time;
use crate::models::{AttendanceRecord, AttendanceStatus, ChildId, EmployeeId, SubjectId, SubjectKind, DATE_FORMAT};
use crate::services::RosterEntry;

use super::render_table;

/// Subject id with the prefix of its kind, e.g. `chd-4`
fn subject_label(kind: SubjectKind, id: SubjectId) -> String {
    match kind {
        SubjectKind::Child => ChildId::new(id.get()).to_string(),
        SubjectKind::Employee => EmployeeId::new(id.get()).to_string(),
    }
}

fn time_or_dash(time: Option<chrono::NaiveTime>) -> String {
    time.map(format_time).unwrap_or_else(|| "-".to_string())
}

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "In")]
    check_in: String,
    #[tabled(rename = "Out")]
    check_out: String,
}

/// Format the day's roster
pub fn format_roster(kind: SubjectKind, date: NaiveDate, entries: &[RosterEntry]) -> String {
    let heading = format!("{} roster for {}\n", kind, date.format(DATE_FORMAT));
    if entries.is_empty() {
        return format!("{}No active {}s.\n", heading, kind.to_string().to_lowercase());
    }

    let rows = entries
        .iter()
        .map(|entry| RosterRow {
            id: subject_label(kind, entry.subject.id),
            name: entry.subject.name.clone(),
            status: entry.status.to_string(),
            check_in: time_or_dash(entry.record.as_ref().and_then(|r| r.check_in)),
            check_out: time_or_dash(entry.record.as_ref().and_then(|r| r.check_out)),
        })
        .collect();

    let present = entries
        .iter()
        .filter(|e| e.status == AttendanceStatus::CheckedIn)
        .count();

    let mut output = heading;
    output.push_str(&render_table(rows));
    output.push_str(&format!("\n{} of {} currently checked in\n", present, entries.len()));
    output
}

/// One-line status of a single subject
pub fn format_attendance_status(
    kind: SubjectKind,
    subject: SubjectId,
    record: Option<&AttendanceRecord>,
) -> String {
    let status = AttendanceStatus::derive(record);
    let mut line = format!("{}: {}", subject_label(kind, subject), status);
    if let Some(record) = record {
        line.push_str(&format!(
            " (in {}, out {})",
            time_or_dash(record.check_in),
            time_or_dash(record.check_out)
        ));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceId, Subject};
    use chrono::NaiveTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
    }

    fn record(check_out: Option<NaiveTime>) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId::new(1),
            subject_kind: SubjectKind::Child,
            subject_id: SubjectId::new(4),
            date: day(),
            check_in: NaiveTime::from_hms_opt(8, 15, 0),
            check_out,
        }
    }

    #[test]
    fn test_status_line() {
        let r = record(None);
        assert_eq!(
            format_attendance_status(SubjectKind::Child, SubjectId::new(4), Some(&r)),
            "chd-4: Checked In (in 08:15:00, out -)\n"
        );
        assert_eq!(
            format_attendance_status(SubjectKind::Employee, SubjectId::new(9), None),
            "emp-9: Absent\n"
        );
    }

    #[test]
    fn test_roster() {
        let entries = vec![
            RosterEntry {
                subject: Subject {
                    id: SubjectId::new(4),
                    name: "Ada".into(),
                    enrollment: None,
                },
                status: AttendanceStatus::CheckedOut,
                record: Some(record(NaiveTime::from_hms_opt(16, 0, 0))),
            },
            RosterEntry {
                subject: Subject {
                    id: SubjectId::new(5),
                    name: "Bo".into(),
                    enrollment: None,
                },
                status: AttendanceStatus::Absent,
                record: None,
            },
        ];

        let output = format_roster(SubjectKind::Child, day(), &entries);
        assert!(output.starts_with("Child roster for 2024-09-02\n"));
        assert!(output.contains("16:00:00"));
        assert!(output.contains("0 of 2 currently checked in"));

        assert_eq!(
            format_roster(SubjectKind::Employee, day(), &[]),
            "Employee roster for 2024-09-02\nNo active employees.\n"
        );
    }
}
