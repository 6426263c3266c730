//! Display formatting for terminal output
//!
//! List views are rendered as tables, detail views as aligned
//! `Label: value` lines.

pub mod attendance;
pub mod category;
pub mod people;
pub mod transaction;

pub use attendance::{format_attendance_status, format_roster};
pub use category::format_category_list;
pub use people::{
    format_child_details, format_child_list, format_employee_details, format_employee_list,
};
pub use transaction::{format_attachment_list, format_transaction_details, format_transaction_list};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows with the shared table style
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Shorten `s` to `max_len` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Empty values shown as a dash
pub(crate) fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}
