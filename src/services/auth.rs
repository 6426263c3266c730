//! Login check
//!
//! Credentials are stored and compared in plaintext.

use tracing::{info, warn};

use crate::error::{DaycareError, DaycareResult};
use crate::models::User;
use crate::storage::Storage;

pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// True if a user with exactly this username and password exists
    pub fn validate_user(&self, username: &str, password: &str) -> DaycareResult<bool> {
        Ok(self
            .storage
            .users()
            .find(username)?
            .is_some_and(|user| user.matches(username, password)))
    }

    /// The matching user, or [`DaycareError::InvalidCredentials`]
    pub fn login(&self, username: &str, password: &str) -> DaycareResult<User> {
        match self.storage.users().find(username)? {
            Some(user) if user.matches(username, password) => {
                info!(username, "login accepted");
                Ok(user)
            }
            _ => {
                warn!(username, "login rejected");
                Err(DaycareError::InvalidCredentials)
            }
        }
    }
}
