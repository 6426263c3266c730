//! Attendance CLI commands
//!
//! Children by default; `--employee` switches every subcommand to staff.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_attendance_status, format_roster};
use crate::error::DaycareResult;
use crate::models::{ChildId, EmployeeId, SubjectId, SubjectKind};
use crate::services::{AttendanceTracker, ChildService, EmployeeService};
use crate::storage::Storage;

use super::{parse_date_arg, parse_id};

/// Attendance subcommands
#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Record arrival now
    CheckIn {
        /// Child or employee ID
        id: String,
        /// Treat the ID as an employee
        #[arg(short, long)]
        employee: bool,
    },
    /// Record departure now
    CheckOut {
        /// Child or employee ID
        id: String,
        #[arg(short, long)]
        employee: bool,
    },
    /// Show one person's status for a day
    Status {
        /// Child or employee ID
        id: String,
        #[arg(short, long)]
        employee: bool,
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show everyone's status for a day
    Roster {
        #[arg(short, long)]
        employee: bool,
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn subject_kind(employee: bool) -> SubjectKind {
    if employee {
        SubjectKind::Employee
    } else {
        SubjectKind::Child
    }
}

/// Resolve an ID argument to a subject that exists
fn resolve_subject(storage: &Storage, kind: SubjectKind, id: &str) -> DaycareResult<SubjectId> {
    match kind {
        SubjectKind::Child => {
            let id: ChildId = parse_id(id, "child")?;
            ChildService::new(storage).get(id)?;
            Ok(id.into())
        }
        SubjectKind::Employee => {
            let id: EmployeeId = parse_id(id, "employee")?;
            EmployeeService::new(storage).get(id)?;
            Ok(id.into())
        }
    }
}

/// Handle an attendance command
pub fn handle_attendance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AttendanceCommands,
) -> DaycareResult<()> {
    match cmd {
        AttendanceCommands::CheckIn { id, employee } => {
            let kind = subject_kind(employee);
            let subject = resolve_subject(storage, kind, &id)?;
            let record = AttendanceTracker::new(storage, kind).check_in(subject)?;
            print!("{}", format_attendance_status(kind, subject, Some(&record)));
        }

        AttendanceCommands::CheckOut { id, employee } => {
            let kind = subject_kind(employee);
            let subject = resolve_subject(storage, kind, &id)?;
            let record = AttendanceTracker::new(storage, kind).check_out(subject)?;
            print!("{}", format_attendance_status(kind, subject, Some(&record)));
        }

        AttendanceCommands::Status { id, employee, date } => {
            let kind = subject_kind(employee);
            let subject = resolve_subject(storage, kind, &id)?;
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => Local::now().date_naive(),
            };
            let record = AttendanceTracker::new(storage, kind).record(subject, date)?;
            print!("{}", format_attendance_status(kind, subject, record.as_ref()));
        }

        AttendanceCommands::Roster { employee, date } => {
            let kind = subject_kind(employee);
            let date = match date {
                Some(d) => parse_date_arg(&d)?,
                None => Local::now().date_naive(),
            };
            let tracker = AttendanceTracker::new(storage, kind)
                .with_active_status(settings.child_active_status);
            print!("{}", format_roster(kind, date, &tracker.roster(date)?));
        }
    }

    Ok(())
}
