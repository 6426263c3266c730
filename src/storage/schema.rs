//! Database schema and first-open seeding
//!
//! Every statement is `IF NOT EXISTS`, so opening an existing database is a
//! no-op apart from seeding tables that are still empty.

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::DaycareResult;
use crate::models::category::default_categories;
use crate::models::user::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::models::TransactionKind;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS income (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        type TEXT NOT NULL,
        date TEXT NOT NULL,
        comments TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_income_date ON income(date);

    CREATE TABLE IF NOT EXISTS expense (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        type TEXT NOT NULL,
        date TEXT NOT NULL,
        comments TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);

    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        category TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        data TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        data TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS expense_files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        expense_id INTEGER NOT NULL,
        file_path TEXT NOT NULL,
        file_name TEXT NOT NULL,
        FOREIGN KEY(expense_id) REFERENCES expense(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS child_attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        child_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        check_in_time TEXT,
        check_out_time TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_child_attendance_day ON child_attendance(child_id, date);

    CREATE TABLE IF NOT EXISTS employee_attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        clock_in_time TEXT,
        clock_out_time TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_employee_attendance_day ON employee_attendance(employee_id, date);
"#;

/// Create all tables and seed defaults
pub fn initialize(conn: &Connection) -> DaycareResult<()> {
    conn.execute_batch(SCHEMA)?;
    seed_default_user(conn)?;
    seed_default_categories(conn)?;
    Ok(())
}

fn seed_default_user(conn: &Connection) -> DaycareResult<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    if count == 0 {
        debug!("seeding default user");
        conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![DEFAULT_USERNAME, DEFAULT_PASSWORD],
        )?;
    }
    Ok(())
}

fn seed_default_categories(conn: &Connection) -> DaycareResult<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(());
    }

    debug!("seeding default categories");
    let mut stmt = conn.prepare("INSERT INTO categories (type, category) VALUES (?1, ?2)")?;
    for kind in TransactionKind::all() {
        for name in default_categories(kind) {
            stmt.execute(params![kind.table(), name])?;
        }
    }
    Ok(())
}
