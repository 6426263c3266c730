//! Child and employee profile documents
//!
//! Each profile is one JSON document in a `data` column, keyed by row id.

use std::marker::PhantomData;

use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DaycareError, DaycareResult};
use crate::models::{
    ChildId, ChildProfile, EmployeeId, EmployeeProfile, ProfileValidationError, SubjectId,
    SubjectKind,
};

/// A profile type stored as a JSON document
pub trait ProfileDocument: Serialize + DeserializeOwned {
    type Id: From<i64> + Into<SubjectId> + ToSql + Copy + std::fmt::Display;

    const KIND: SubjectKind;
    const ENTITY: &'static str;

    /// Display name of the person
    fn display_name(&self) -> &str;

    fn validate(&self) -> Result<(), ProfileValidationError>;
}

impl ProfileDocument for ChildProfile {
    type Id = ChildId;
    const KIND: SubjectKind = SubjectKind::Child;
    const ENTITY: &'static str = "Child";

    fn display_name(&self) -> &str {
        &self.full_name
    }

    fn validate(&self) -> Result<(), ProfileValidationError> {
        ChildProfile::validate(self)
    }
}

impl ProfileDocument for EmployeeProfile {
    type Id = EmployeeId;
    const KIND: SubjectKind = SubjectKind::Employee;
    const ENTITY: &'static str = "Employee";

    fn display_name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ProfileValidationError> {
        EmployeeProfile::validate(self)
    }
}

pub struct ProfileRepository<'a, P> {
    conn: &'a Connection,
    _profile: PhantomData<P>,
}

impl<'a, P: ProfileDocument> ProfileRepository<'a, P> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            _profile: PhantomData,
        }
    }

    pub fn insert(&self, profile: &P) -> DaycareResult<P::Id> {
        let data = serde_json::to_string(profile)?;
        let sql = format!("INSERT INTO {} (data) VALUES (?1)", P::KIND.profile_table());
        self.conn.execute(&sql, params![data])?;
        Ok(P::Id::from(self.conn.last_insert_rowid()))
    }

    pub fn get(&self, id: P::Id) -> DaycareResult<Option<P>> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", P::KIND.profile_table());
        let data: Option<String> = self
            .conn
            .query_row(&sql, params![id], |row| row.get(0))
            .optional()?;

        data.map(|d| decode::<P>(id, &d)).transpose()
    }

    /// Every profile in insertion order
    pub fn list(&self) -> DaycareResult<Vec<(P::Id, P)>> {
        let sql = format!("SELECT id, data FROM {} ORDER BY id", P::KIND.profile_table());
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;

        let mut profiles = Vec::new();
        for row in rows {
            let (raw_id, data) = row?;
            let id = P::Id::from(raw_id);
            profiles.push((id, decode::<P>(id, &data)?));
        }
        Ok(profiles)
    }

    pub fn update(&self, id: P::Id, profile: &P) -> DaycareResult<bool> {
        let data = serde_json::to_string(profile)?;
        let sql = format!("UPDATE {} SET data = ?1 WHERE id = ?2", P::KIND.profile_table());
        Ok(self.conn.execute(&sql, params![data, id])? > 0)
    }

    pub fn delete(&self, id: P::Id) -> DaycareResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", P::KIND.profile_table());
        Ok(self.conn.execute(&sql, params![id])? > 0)
    }
}

fn decode<P: ProfileDocument>(id: P::Id, data: &str) -> DaycareResult<P> {
    serde_json::from_str(data)
        .map_err(|e| DaycareError::Json(format!("{} {} has an unreadable profile: {}", P::ENTITY, id, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnrollmentStatus;
    use crate::storage::Storage;

    #[test]
    fn test_child_round_trip() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.children();

        let mut profile = ChildProfile::new("Ada Lovelace");
        profile.allergies = "peanuts".into();
        profile.enrollment_status = EnrollmentStatus::Waitlisted;
        let id = repo.insert(&profile).unwrap();

        assert_eq!(repo.get(id).unwrap(), Some(profile));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_and_delete_employee() {
        let storage = Storage::open_in_memory().unwrap();
        let repo = storage.employees();
        let id = repo.insert(&EmployeeProfile::new("Sam")).unwrap();

        let mut changed = EmployeeProfile::new("Sam");
        changed.email = "sam@example.com".into();
        assert!(repo.update(id, &changed).unwrap());
        assert_eq!(repo.get(id).unwrap().unwrap().email, "sam@example.com");

        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert!(!repo.update(id, &changed).unwrap());
    }

    #[test]
    fn test_corrupt_document_is_a_json_error() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .connection()
            .execute("INSERT INTO employees (data) VALUES ('not json')", [])
            .unwrap();

        let err = storage.employees().list().unwrap_err();
        assert!(matches!(err, DaycareError::Json(_)));
        assert!(err.to_string().contains("Employee emp-1"));
    }
}
