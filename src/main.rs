use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daycare::cli::{
    handle_attendance_command, handle_category_command, handle_child_command,
    handle_employee_command, handle_expense_command, handle_income_command, handle_login,
    handle_report_command,
};
use daycare::config::{paths::DaycarePaths, settings::Settings};
use daycare::error::DaycareResult;
use daycare::models::category::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
use daycare::storage::Storage;

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "DAYCARE_LOG";

#[derive(Parser)]
#[command(
    name = "daycare",
    version,
    about = "Record keeping for a small daycare",
    long_about = "Track income and expenses, child enrollment, staff records and \
                  daily attendance, and produce profit and loss, balance sheet, \
                  cash flow and tax summary reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, database and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Check a username and password
    Login(daycare::cli::LoginArgs),

    /// Income entries
    #[command(subcommand)]
    Income(daycare::cli::LedgerCommands),

    /// Expense entries and their attachments
    #[command(subcommand)]
    Expense(daycare::cli::ExpenseCommands),

    /// Child enrollment records
    #[command(subcommand)]
    Child(daycare::cli::ChildCommands),

    /// Employee records
    #[command(subcommand)]
    Employee(daycare::cli::EmployeeCommands),

    /// Daily check-in and check-out
    #[command(subcommand)]
    Attendance(daycare::cli::AttendanceCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(daycare::cli::ReportCommands),

    /// Income and expense categories
    #[command(subcommand)]
    Category(daycare::cli::CategoryCommands),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let paths = DaycarePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("daycare - record keeping for a small daycare");
        println!();
        println!("Run 'daycare --help' for usage information.");
        println!("Run 'daycare init' to set up a new data directory.");
        return Ok(ExitCode::SUCCESS);
    };

    let storage = Storage::open(paths.clone())
        .with_context(|| format!("Failed to open {}", paths.database_file().display()))?;

    match run(command, &storage, &paths, &settings) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_warning() => {
            eprintln!("Warning: {}", e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(
    command: Commands,
    storage: &Storage,
    paths: &DaycarePaths,
    settings: &Settings,
) -> DaycareResult<()> {
    match command {
        Commands::Init => {
            settings.save(paths)?;
            println!("Initialized daycare data at: {}", paths.data_dir().display());
            println!();
            println!(
                "Default categories: {} income, {} expense.",
                DEFAULT_INCOME_CATEGORIES.len(),
                DEFAULT_EXPENSE_CATEGORIES.len()
            );
            println!("Default login: admin / password");
            println!();
            println!("Run 'daycare category list' to see all categories.");
        }
        Commands::Config => {
            println!("Daycare Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Database:          {}", paths.database_file().display());
            println!("Attachments:       {}", paths.attachments_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Roster shows status: {}", settings.child_active_status);
        }
        Commands::Login(args) => handle_login(storage, args)?,
        Commands::Income(cmd) => handle_income_command(storage, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(storage, cmd)?,
        Commands::Child(cmd) => handle_child_command(storage, cmd)?,
        Commands::Employee(cmd) => handle_employee_command(storage, cmd)?,
        Commands::Attendance(cmd) => handle_attendance_command(storage, settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(storage, cmd)?,
        Commands::Category(cmd) => handle_category_command(storage, cmd)?,
    }

    Ok(())
}
