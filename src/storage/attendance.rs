//! Child and employee attendance tables
//!
//! The two tables differ only in column names; `SubjectKind` supplies them.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::DaycareResult;
use crate::models::attendance::format_time;
use crate::models::{AttendanceId, AttendanceRecord, SubjectId, SubjectKind};

pub struct AttendanceRepository<'a> {
    conn: &'a Connection,
}

impl<'a> AttendanceRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn select(kind: SubjectKind) -> String {
        format!(
            "SELECT id, {subject}, date, {time_in}, {time_out} FROM {table}",
            subject = kind.subject_column(),
            time_in = kind.in_column(),
            time_out = kind.out_column(),
            table = kind.attendance_table(),
        )
    }

    /// The record for a subject on a day. If legacy data holds several, the
    /// oldest one wins.
    pub fn find(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
    ) -> DaycareResult<Option<AttendanceRecord>> {
        let sql = format!(
            "{} WHERE {} = ?1 AND date = ?2 ORDER BY id LIMIT 1",
            Self::select(kind),
            kind.subject_column()
        );
        let record = self
            .conn
            .query_row(&sql, params![subject, date], |row| from_row(kind, row))
            .optional()?;
        Ok(record)
    }

    pub fn insert(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
        date: NaiveDate,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
    ) -> DaycareResult<AttendanceId> {
        let sql = format!(
            "INSERT INTO {} ({}, date, {}, {}) VALUES (?1, ?2, ?3, ?4)",
            kind.attendance_table(),
            kind.subject_column(),
            kind.in_column(),
            kind.out_column()
        );
        self.conn.execute(
            &sql,
            params![
                subject,
                date,
                check_in.map(format_time),
                check_out.map(format_time)
            ],
        )?;
        Ok(AttendanceId::new(self.conn.last_insert_rowid()))
    }

    /// Write both times of an existing record
    pub fn update_times(&self, record: &AttendanceRecord) -> DaycareResult<bool> {
        let kind = record.subject_kind;
        let sql = format!(
            "UPDATE {} SET {} = ?1, {} = ?2 WHERE id = ?3",
            kind.attendance_table(),
            kind.in_column(),
            kind.out_column()
        );
        let changed = self.conn.execute(
            &sql,
            params![
                record.check_in.map(format_time),
                record.check_out.map(format_time),
                record.id
            ],
        )?;
        Ok(changed > 0)
    }

    /// Every record on a given day
    pub fn list_for_date(
        &self,
        kind: SubjectKind,
        date: NaiveDate,
    ) -> DaycareResult<Vec<AttendanceRecord>> {
        let sql = format!("{} WHERE date = ?1 ORDER BY id", Self::select(kind));
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![date], |row| from_row(kind, row))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// A subject's full history, newest day first
    pub fn history(
        &self,
        kind: SubjectKind,
        subject: SubjectId,
    ) -> DaycareResult<Vec<AttendanceRecord>> {
        let sql = format!(
            "{} WHERE {} = ?1 ORDER BY date DESC, id",
            Self::select(kind),
            kind.subject_column()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![subject], |row| from_row(kind, row))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn from_row(kind: SubjectKind, row: &Row<'_>) -> rusqlite::Result<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: row.get(0)?,
        subject_kind: kind,
        subject_id: row.get(1)?,
        date: row.get(2)?,
        check_in: row.get::<_, Option<NaiveTime>>(3)?,
        check_out: row.get::<_, Option<NaiveTime>>(4)?,
    })
}
