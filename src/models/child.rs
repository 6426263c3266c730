//! Child enrollment profile
//!
//! Stored as a JSON document, one row per child. Every field except the
//! child's name is defaulted so that sparse documents still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ChildId;
use super::money::Money;

/// Maximum number of emergency contacts on file
pub const MAX_EMERGENCY_CONTACTS: usize = 3;

/// Maximum number of people authorized to pick a child up
pub const MAX_PICKUP_AUTHORIZATIONS: usize = 3;

/// Enrollment state of a child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[default]
    Enrolled,
    Waitlisted,
    Withdrawn,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Enrolled => "Enrolled",
            Self::Waitlisted => "Waitlisted",
            Self::Withdrawn => "Withdrawn",
        };
        f.pad(label)
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enrolled" => Ok(Self::Enrolled),
            "waitlisted" => Ok(Self::Waitlisted),
            "withdrawn" => Ok(Self::Withdrawn),
            other => Err(format!(
                "Unknown enrollment status '{}' (expected Enrolled, Waitlisted or Withdrawn)",
                other
            )),
        }
    }
}

/// Contact details for a parent or guardian
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentContact {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl ParentContact {
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupAuthorization {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Physician or dentist on file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareProvider {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub last_exam_date: Option<NaiveDate>,
}

/// Facility to use in an emergency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyCare {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Parental consents for care items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consents {
    pub lip_balm: bool,
    pub lotion: bool,
    pub diaper_ointment: bool,
    pub sunscreen: bool,
    pub medicine: bool,
    pub photo: bool,
    pub meals: bool,
}

impl Consents {
    /// Labels of the items consent was given for
    pub fn granted(&self) -> Vec<&'static str> {
        [
            (self.lip_balm, "Lip balm"),
            (self.lotion, "Lotion"),
            (self.diaper_ointment, "Diaper ointment"),
            (self.sunscreen, "Sunscreen"),
            (self.medicine, "Medicine"),
            (self.photo, "Photo"),
            (self.meals, "Meals"),
        ]
        .into_iter()
        .filter(|(given, _)| *given)
        .map(|(_, label)| label)
        .collect()
    }
}

/// Full enrollment record for a child
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildProfile {
    pub full_name: String,
    pub enrollment_start_date: Option<NaiveDate>,
    pub fee: Option<Money>,
    pub enrollment_status: EnrollmentStatus,

    pub father: ParentContact,
    pub mother: ParentContact,

    pub emergency_contacts: Vec<EmergencyContact>,
    pub pickup_authorizations: Vec<PickupAuthorization>,

    pub medical_conditions: String,
    pub allergies: String,

    pub medical_provider: CareProvider,
    pub dental_provider: CareProvider,
    pub emergency_care: EmergencyCare,

    pub consents: Consents,
}

impl ChildProfile {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    pub fn is_active(&self, active_status: EnrollmentStatus) -> bool {
        self.enrollment_status == active_status
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }

        if self.emergency_contacts.len() > MAX_EMERGENCY_CONTACTS {
            return Err(ProfileValidationError::TooManyEmergencyContacts(
                self.emergency_contacts.len(),
            ));
        }

        if self.pickup_authorizations.len() > MAX_PICKUP_AUTHORIZATIONS {
            return Err(ProfileValidationError::TooManyPickupAuthorizations(
                self.pickup_authorizations.len(),
            ));
        }

        Ok(())
    }
}

/// A stored child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: ChildId,
    pub profile: ChildProfile,
}

/// Validation errors shared by child and employee profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    TooManyEmergencyContacts(usize),
    TooManyPickupAuthorizations(usize),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required"),
            Self::TooManyEmergencyContacts(n) => write!(
                f,
                "At most {} emergency contacts allowed, got {}",
                MAX_EMERGENCY_CONTACTS, n
            ),
            Self::TooManyPickupAuthorizations(n) => write!(
                f,
                "At most {} pickup authorizations allowed, got {}",
                MAX_PICKUP_AUTHORIZATIONS, n
            ),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_document_loads() {
        let profile: ChildProfile = serde_json::from_str(r#"{"full_name": "Ada"}"#).unwrap();
        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.enrollment_status, EnrollmentStatus::Enrolled);
        assert!(profile.father.is_empty());
        assert!(profile.emergency_contacts.is_empty());
        assert!(!profile.consents.photo);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            ChildProfile::new("  ").validate(),
            Err(ProfileValidationError::EmptyName)
        );

        let mut profile = ChildProfile::new("Ada");
        assert!(profile.validate().is_ok());

        profile.pickup_authorizations = vec![PickupAuthorization::default(); 4];
        assert_eq!(
            profile.validate(),
            Err(ProfileValidationError::TooManyPickupAuthorizations(4))
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "waitlisted".parse::<EnrollmentStatus>(),
            Ok(EnrollmentStatus::Waitlisted)
        );
        assert!("graduated".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn test_parent_full_name_skips_blank_parts() {
        let parent = ParentContact {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            ..ParentContact::default()
        };
        assert_eq!(parent.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_consents_granted() {
        let consents = Consents {
            sunscreen: true,
            meals: true,
            ..Consents::default()
        };
        assert_eq!(consents.granted(), vec!["Sunscreen", "Meals"]);
    }
}
