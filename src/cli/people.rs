//! Child and employee CLI commands
//!
//! Common fields are set with flags. A complete child record (parents,
//! contacts, providers, consents) can be loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::display::{
    format_child_details, format_child_list, format_employee_details, format_employee_list,
};
use crate::error::{DaycareError, DaycareResult};
use crate::models::{ChildId, ChildProfile, EmployeeId, EmployeeProfile, EnrollmentStatus};
use crate::services::{ChildService, EmployeeService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_arg, parse_id};

/// Child enrollment subcommands
#[derive(Subcommand)]
pub enum ChildCommands {
    /// Enroll a child
    Add {
        /// Full name (optional when --file is given)
        name: Option<String>,
        /// Read the full profile from a JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        fields: ChildFields,
    },
    /// List children
    List {
        /// Only children with this status (enrolled, waitlisted, withdrawn)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show a child's full record
    Show {
        /// Child ID
        id: String,
    },
    /// Edit a child's record
    Edit {
        /// Child ID
        id: String,
        /// New full name
        #[arg(long)]
        name: Option<String>,
        /// Replace the whole profile with this JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        fields: ChildFields,
    },
    /// Remove a child; attendance history is kept
    Delete {
        /// Child ID
        id: String,
    },
}

/// Flags shared by `child add` and `child edit`
#[derive(clap::Args, Default)]
pub struct ChildFields {
    /// Enrollment status
    #[arg(short, long)]
    pub status: Option<String>,
    /// Enrollment start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Tuition fee
    #[arg(long)]
    pub fee: Option<String>,
    #[arg(long)]
    pub allergies: Option<String>,
    /// Medical conditions
    #[arg(long)]
    pub conditions: Option<String>,
}

impl ChildFields {
    fn apply(self, profile: &mut ChildProfile) -> DaycareResult<()> {
        if let Some(status) = self.status {
            profile.enrollment_status = parse_status(&status)?;
        }
        if let Some(date) = self.start_date {
            profile.enrollment_start_date = Some(parse_date_arg(&date)?);
        }
        if let Some(fee) = self.fee {
            profile.fee = Some(parse_amount(&fee)?);
        }
        if let Some(allergies) = self.allergies {
            profile.allergies = allergies;
        }
        if let Some(conditions) = self.conditions {
            profile.medical_conditions = conditions;
        }
        Ok(())
    }
}

/// Employee subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Add an employee
    Add {
        /// Name
        name: String,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// List employees
    List,
    /// Show an employee's record
    Show {
        /// Employee ID
        id: String,
    },
    /// Edit an employee's record
    Edit {
        /// Employee ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Remove an employee; attendance history is kept
    Delete {
        /// Employee ID
        id: String,
    },
}

#[derive(clap::Args, Default)]
pub struct EmployeeFields {
    #[arg(long)]
    pub address: Option<String>,
    /// Contact number
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
}

impl EmployeeFields {
    fn apply(self, profile: &mut EmployeeProfile) {
        if let Some(address) = self.address {
            profile.address = address;
        }
        if let Some(phone) = self.phone {
            profile.contact_number = phone;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(comments) = self.comments {
            profile.comments = comments;
        }
    }
}

fn parse_status(s: &str) -> DaycareResult<EnrollmentStatus> {
    s.parse().map_err(DaycareError::Validation)
}

fn load_child_profile(path: &Path) -> DaycareResult<ChildProfile> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DaycareError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| DaycareError::Json(format!("Invalid profile in {}: {}", path.display(), e)))
}

/// Handle a child command
pub fn handle_child_command(storage: &Storage, cmd: ChildCommands) -> DaycareResult<()> {
    let service = ChildService::new(storage);

    match cmd {
        ChildCommands::Add { name, file, fields } => {
            let mut profile = match &file {
                Some(path) => load_child_profile(path)?,
                None => ChildProfile::default(),
            };
            if let Some(name) = name {
                profile.full_name = name;
            }
            fields.apply(&mut profile)?;

            let (id, child) = service.add(profile)?;
            println!("Enrolled {} ({})", child.full_name, id);
        }

        ChildCommands::List { status } => {
            let children = match status {
                Some(status) => service.list_with_status(parse_status(&status)?)?,
                None => service.list()?,
            };
            print!("{}", format_child_list(&children));
        }

        ChildCommands::Show { id } => {
            let id: ChildId = parse_id(&id, "child")?;
            print!("{}", format_child_details(id, &service.get(id)?));
        }

        ChildCommands::Edit {
            id,
            name,
            file,
            fields,
        } => {
            let id: ChildId = parse_id(&id, "child")?;
            let mut profile = match &file {
                Some(path) => load_child_profile(path)?,
                None => service.get(id)?,
            };
            if let Some(name) = name {
                profile.full_name = name;
            }
            fields.apply(&mut profile)?;

            let child = service.update(id, profile)?;
            println!("Updated {} ({})", child.full_name, id);
        }

        ChildCommands::Delete { id } => {
            let id: ChildId = parse_id(&id, "child")?;
            let child = service.delete(id)?;
            println!("Removed {} ({})", child.full_name, id);
        }
    }

    Ok(())
}

/// Handle an employee command
pub fn handle_employee_command(storage: &Storage, cmd: EmployeeCommands) -> DaycareResult<()> {
    let service = EmployeeService::new(storage);

    match cmd {
        EmployeeCommands::Add { name, fields } => {
            let mut profile = EmployeeProfile::new(name);
            fields.apply(&mut profile);

            let (id, employee) = service.add(profile)?;
            println!("Added employee {} ({})", employee.name, id);
        }

        EmployeeCommands::List => {
            print!("{}", format_employee_list(&service.list()?));
        }

        EmployeeCommands::Show { id } => {
            let id: EmployeeId = parse_id(&id, "employee")?;
            print!("{}", format_employee_details(id, &service.get(id)?));
        }

        EmployeeCommands::Edit { id, name, fields } => {
            let id: EmployeeId = parse_id(&id, "employee")?;
            let mut profile = service.get(id)?;
            if let Some(name) = name {
                profile.name = name;
            }
            fields.apply(&mut profile);

            let employee = service.update(id, profile)?;
            println!("Updated {} ({})", employee.name, id);
        }

        EmployeeCommands::Delete { id } => {
            let id: EmployeeId = parse_id(&id, "employee")?;
            let employee = service.delete(id)?;
            println!("Removed {} ({})", employee.name, id);
        }
    }

    Ok(())
}
