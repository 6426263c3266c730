//! Child and employee display formatting

use tabled::Tabled;

use crate::models::{
    CareProvider, ChildId, ChildProfile, EmployeeId, EmployeeProfile, ParentContact, DATE_FORMAT,
};

use super::{or_dash, render_table, truncate};

#[derive(Tabled)]
struct ChildRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Since")]
    since: String,
    #[tabled(rename = "Fee")]
    fee: String,
    #[tabled(rename = "Allergies")]
    allergies: String,
}

pub fn format_child_list(children: &[(ChildId, ChildProfile)]) -> String {
    if children.is_empty() {
        return "No children enrolled.\n".to_string();
    }

    let rows = children
        .iter()
        .map(|(id, child)| ChildRow {
            id: id.to_string(),
            name: child.full_name.clone(),
            status: child.enrollment_status.to_string(),
            since: child
                .enrollment_start_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
            fee: child
                .fee
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".to_string()),
            allergies: truncate(&or_dash(&child.allergies), 24),
        })
        .collect();

    let mut output = render_table(rows);
    output.push('\n');
    output
}

fn push_parent(output: &mut String, label: &str, parent: &ParentContact) {
    if parent.is_empty() {
        return;
    }

    output.push_str(&format!("\n{}:\n", label));
    output.push_str(&format!("  Name:    {}\n", or_dash(&parent.full_name())));
    output.push_str(&format!("  Phone:   {}\n", or_dash(&parent.phone)));
    output.push_str(&format!("  Email:   {}\n", or_dash(&parent.email)));

    let address: Vec<&str> = [
        parent.address_line1.as_str(),
        parent.address_line2.as_str(),
        parent.city.as_str(),
        parent.state.as_str(),
        parent.postal_code.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.trim().is_empty())
    .collect();
    if !address.is_empty() {
        output.push_str(&format!("  Address: {}\n", address.join(", ")));
    }
}

fn push_provider(output: &mut String, label: &str, provider: &CareProvider) {
    if provider.name.trim().is_empty() {
        return;
    }

    output.push_str(&format!("{:<14}{}", label, provider.name));
    if !provider.phone.is_empty() {
        output.push_str(&format!(" ({})", provider.phone));
    }
    if let Some(exam) = provider.last_exam_date {
        output.push_str(&format!(", last exam {}", exam.format(DATE_FORMAT)));
    }
    output.push('\n');
}

/// Full enrollment record of one child
pub fn format_child_details(id: ChildId, child: &ChildProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Child:        {} ({})\n", child.full_name, id));
    output.push_str(&format!("Status:       {}\n", child.enrollment_status));
    if let Some(start) = child.enrollment_start_date {
        output.push_str(&format!("Enrolled on:  {}\n", start.format(DATE_FORMAT)));
    }
    if let Some(fee) = child.fee {
        output.push_str(&format!("Fee:          {}\n", fee));
    }

    push_parent(&mut output, "Father", &child.father);
    push_parent(&mut output, "Mother", &child.mother);

    if !child.emergency_contacts.is_empty() {
        output.push_str("\nEmergency contacts:\n");
        for (i, contact) in child.emergency_contacts.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {} {}\n",
                i + 1,
                contact.name,
                or_dash(&contact.phone),
                or_dash(&contact.relationship)
            ));
        }
    }

    if !child.pickup_authorizations.is_empty() {
        output.push_str("\nAuthorized for pickup:\n");
        for (i, pickup) in child.pickup_authorizations.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {} {}\n",
                i + 1,
                pickup.name,
                or_dash(&pickup.phone),
                or_dash(&pickup.relationship)
            ));
        }
    }

    output.push_str("\nHealth:\n");
    output.push_str(&format!("Conditions:   {}\n", or_dash(&child.medical_conditions)));
    output.push_str(&format!("Allergies:    {}\n", or_dash(&child.allergies)));
    push_provider(&mut output, "Physician:", &child.medical_provider);
    push_provider(&mut output, "Dentist:", &child.dental_provider);
    if !child.emergency_care.name.trim().is_empty() {
        output.push_str(&format!(
            "Emergency:    {} {}\n",
            child.emergency_care.name,
            or_dash(&child.emergency_care.phone)
        ));
    }

    let consents = child.consents.granted();
    output.push_str(&format!(
        "\nConsents:     {}\n",
        if consents.is_empty() {
            "none".to_string()
        } else {
            consents.join(", ")
        }
    ));

    output
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
}

pub fn format_employee_list(employees: &[(EmployeeId, EmployeeProfile)]) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let rows = employees
        .iter()
        .map(|(id, employee)| EmployeeRow {
            id: id.to_string(),
            name: employee.name.clone(),
            phone: or_dash(&employee.contact_number),
            email: or_dash(&employee.email),
        })
        .collect();

    let mut output = render_table(rows);
    output.push('\n');
    output
}

pub fn format_employee_details(id: EmployeeId, employee: &EmployeeProfile) -> String {
    let mut output = String::new();
    output.push_str(&format!("Employee: {} ({})\n", employee.name, id));
    output.push_str(&format!("Address:  {}\n", or_dash(&employee.address)));
    output.push_str(&format!("Phone:    {}\n", or_dash(&employee.contact_number)));
    output.push_str(&format!("Email:    {}\n", or_dash(&employee.email)));
    if !employee.comments.trim().is_empty() {
        output.push_str(&format!("\n{}\n", employee.comments));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyContact, Money};

    #[test]
    fn test_child_list() {
        let mut child = ChildProfile::new("Ada Lovelace");
        child.fee = Some(Money::from_cents(25_000));
        let output = format_child_list(&[(ChildId::new(7), child)]);

        assert!(output.contains("chd-7"));
        assert!(output.contains("Ada Lovelace"));
        assert!(output.contains("$250.00"));
        assert_eq!(format_child_list(&[]), "No children enrolled.\n");
    }

    #[test]
    fn test_child_details_skip_empty_sections() {
        let mut child = ChildProfile::new("Ada");
        child.emergency_contacts.push(EmergencyContact {
            name: "Grace".into(),
            phone: "555-0101".into(),
            ..Default::default()
        });
        child.consents.sunscreen = true;
        child.consents.meals = true;

        let output = format_child_details(ChildId::new(1), &child);
        assert!(output.starts_with("Child:        Ada (chd-1)"));
        assert!(!output.contains("Father:"));
        assert!(output.contains("  1. Grace 555-0101 -"));
        assert!(output.contains("Consents:     Sunscreen, Meals"));
    }

    #[test]
    fn test_employee_details() {
        let mut employee = EmployeeProfile::new("Sam");
        employee.email = "sam@example.com".into();
        let output = format_employee_details(EmployeeId::new(2), &employee);
        assert!(output.contains("Employee: Sam (emp-2)"));
        assert!(output.contains("Phone:    -"));
        assert!(output.contains("sam@example.com"));
    }
}
