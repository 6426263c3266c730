//! Category service
//!
//! Maintains the per-kind category lists. Names are unique within a kind,
//! compared without regard to case or surrounding whitespace.

use tracing::info;

use crate::audit::{AuditEntry, AuditSubject};
use crate::error::{DaycareError, DaycareResult};
use crate::models::{Category, TransactionKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self, kind: TransactionKind) -> DaycareResult<Vec<Category>> {
        self.storage.categories().list(kind)
    }

    /// Add a category to a kind's list
    pub fn add(&self, kind: TransactionKind, name: &str) -> DaycareResult<Category> {
        let name = name.trim();
        Category::validate_name(name).map_err(|e| DaycareError::Validation(e.to_string()))?;

        if self.storage.categories().find_by_name(kind, name)?.is_some() {
            return Err(DaycareError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let id = self.storage.categories().insert(kind, name)?;
        let category = Category {
            id,
            kind,
            name: name.to_string(),
        };

        self.storage
            .record_audit(|| AuditEntry::created(AuditSubject::category(&category), &category));
        info!(kind = %kind, name = %category.name, "category added");

        Ok(category)
    }

    /// Remove a category by name. Existing transactions keep their label.
    pub fn remove(&self, kind: TransactionKind, name: &str) -> DaycareResult<Category> {
        let category = self
            .storage
            .categories()
            .find_by_name(kind, name)?
            .ok_or_else(|| DaycareError::category_not_found(name.trim()))?;

        self.storage.categories().delete(category.id)?;
        self.storage
            .record_audit(|| AuditEntry::deleted(AuditSubject::category(&category), &category));
        info!(kind = %kind, name = %category.name, "category removed");

        Ok(category)
    }
}
