//! Core data models for the daycare ledger
//!
//! This module contains the records the application keeps: income and
//! expense transactions, child and employee profiles, daily attendance,
//! expense attachments, categories and login users.

pub mod attachment;
pub mod attendance;
pub mod category;
pub mod child;
pub mod employee;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use attachment::ExpenseAttachment;
pub use attendance::{AttendanceRecord, AttendanceStatus, Subject, SubjectKind};
pub use category::Category;
pub use child::{
    CareProvider, Child, ChildProfile, Consents, EmergencyCare, EmergencyContact,
    EnrollmentStatus, ParentContact, PickupAuthorization, ProfileValidationError,
};
pub use employee::{Employee, EmployeeProfile};
pub use ids::{
    AttachmentId, AttendanceId, CategoryId, ChildId, EmployeeId, SubjectId, TransactionId, UserId,
};
pub use money::Money;
pub use period::{parse_date, DateRange, PeriodError, DATE_FORMAT};
pub use transaction::{Transaction, TransactionInput, TransactionKind};
pub use user::User;
