//! Login command

use std::io::{self, BufRead};

use clap::Args;

use crate::error::{DaycareError, DaycareResult};
use crate::services::AuthService;
use crate::storage::Storage;

#[derive(Args)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long, default_value = "admin")]
    pub username: String,
    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> DaycareResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| DaycareError::Io(format!("Failed to read password: {}", e)))
}

fn read_password_line() -> DaycareResult<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Check a username and password against the users table
pub fn handle_login(storage: &Storage, args: LoginArgs) -> DaycareResult<()> {
    let password = if args.password_stdin {
        read_password_line()?
    } else {
        prompt_password("Password: ")?
    };

    let user = AuthService::new(storage).login(&args.username, &password)?;
    println!("Logged in as {}", user.username);
    Ok(())
}
