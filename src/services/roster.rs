//! Roster service
//!
//! Enrollment records for children and personnel records for employees.
//! Removing a person leaves their attendance history in place.

use tracing::info;

use crate::audit::{AuditEntry, AuditSubject};
use crate::error::{DaycareError, DaycareResult};
use crate::models::{ChildId, ChildProfile, EmployeeProfile, EnrollmentStatus};
use crate::storage::{ProfileDocument, ProfileRepository, Storage};

/// Profile operations for one kind of person
pub struct RosterService<'a, P> {
    storage: &'a Storage,
    repo: ProfileRepository<'a, P>,
}

pub type ChildService<'a> = RosterService<'a, ChildProfile>;
pub type EmployeeService<'a> = RosterService<'a, EmployeeProfile>;

impl<'a, P: ProfileDocument> RosterService<'a, P> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            repo: ProfileRepository::new(storage.connection()),
        }
    }

    fn not_found(id: P::Id) -> DaycareError {
        DaycareError::NotFound {
            entity_type: P::ENTITY,
            identifier: id.to_string(),
        }
    }

    fn audit_subject(id: P::Id, profile: &P) -> AuditSubject {
        AuditSubject::profile(P::KIND, id, profile.display_name())
    }

    /// Add a person after validating their profile
    pub fn add(&self, profile: P) -> DaycareResult<(P::Id, P)> {
        profile
            .validate()
            .map_err(|e| DaycareError::Validation(e.to_string()))?;

        let id = self.repo.insert(&profile)?;
        self.storage
            .record_audit(|| AuditEntry::created(Self::audit_subject(id, &profile), &profile));
        info!(entity = P::ENTITY, %id, "profile added");

        Ok((id, profile))
    }

    pub fn get(&self, id: P::Id) -> DaycareResult<P> {
        self.repo.get(id)?.ok_or_else(|| Self::not_found(id))
    }

    /// Every profile in the order they were added
    pub fn list(&self) -> DaycareResult<Vec<(P::Id, P)>> {
        self.repo.list()
    }

    /// Replace a stored profile
    pub fn update(&self, id: P::Id, profile: P) -> DaycareResult<P> {
        let before = self.get(id)?;
        profile
            .validate()
            .map_err(|e| DaycareError::Validation(e.to_string()))?;

        self.repo.update(id, &profile)?;
        self.storage.record_audit(|| {
            AuditEntry::updated(Self::audit_subject(id, &profile), &before, &profile)
        });
        info!(entity = P::ENTITY, %id, "profile updated");

        Ok(profile)
    }

    pub fn delete(&self, id: P::Id) -> DaycareResult<P> {
        let profile = self.get(id)?;

        self.repo.delete(id)?;
        self.storage
            .record_audit(|| AuditEntry::deleted(Self::audit_subject(id, &profile), &profile));
        info!(entity = P::ENTITY, %id, "profile deleted");

        Ok(profile)
    }
}

impl<'a> ChildService<'a> {
    /// Children with the given enrollment status
    pub fn list_with_status(
        &self,
        status: EnrollmentStatus,
    ) -> DaycareResult<Vec<(ChildId, ChildProfile)>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|(_, child)| child.enrollment_status == status)
            .collect())
    }
}
