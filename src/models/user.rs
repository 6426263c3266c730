//! Login user

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Username seeded when the users table is empty
pub const DEFAULT_USERNAME: &str = "admin";

/// Password seeded alongside [`DEFAULT_USERNAME`]
pub const DEFAULT_PASSWORD: &str = "password";

/// A login account. The password is kept in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Exact, case-sensitive credential comparison
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_sensitive() {
        let user = User {
            id: UserId::new(1),
            username: DEFAULT_USERNAME.into(),
            password: DEFAULT_PASSWORD.into(),
        };
        assert!(user.matches("admin", "password"));
        assert!(!user.matches("Admin", "password"));
        assert!(!user.matches("admin", "Password"));
    }
}
