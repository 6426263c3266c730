//! Employee profile

use serde::{Deserialize, Serialize};

use super::child::ProfileValidationError;
use super::ids::EmployeeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeProfile {
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub comments: String,
}

impl EmployeeProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A stored employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub profile: EmployeeProfile,
}
